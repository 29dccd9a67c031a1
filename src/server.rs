use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, Settings};
use crate::routes::{self, AppState};

/// Which of the two services a process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Playlist,
    Visualizer,
}

impl ServiceKind {
    /// Name reported by the root route
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::Playlist => "HackMix API",
            ServiceKind::Visualizer => "HackMix Visualization API",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Playlist => 8000,
            ServiceKind::Visualizer => 8001,
        }
    }
}

/// Initialize logging from settings; `RUST_LOG` takes precedence over the configured level
pub fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

/// CORS policy admitting a single origin with any method and header
pub fn cors_for(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Load configuration, set up logging and serve `service` until shutdown
pub async fn run(service: ServiceKind) -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load(service).map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_tracing(&settings.logging);

    info!("Starting {}...", service.display_name());

    let app_state = AppState::from_settings(service, &settings);
    if service == ServiceKind::Playlist {
        app_state.playlist.validate().map_err(|e| {
            error!("Invalid playlist configuration: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
        })?;
    }

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let allowed_origin = settings.cors.allowed_origin.clone();

    info!("Starting HTTP server on {}:{} (CORS origin: {})", host, port, allowed_origin);

    HttpServer::new(move || {
        let cors = cors_for(&allowed_origin);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes(service))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
