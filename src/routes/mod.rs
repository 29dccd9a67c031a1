// Route exports
pub mod analyze;
pub mod health;
pub mod playlist;

use actix_web::web;
use std::sync::Arc;

use crate::config::Settings;
use crate::core::{ChartGenerator, FileIntake, PlaylistGenerator, sample_songs};
use crate::ServiceKind;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ServiceKind,
    pub playlist: Arc<PlaylistGenerator>,
    pub intake: FileIntake,
    pub charts: ChartGenerator,
}

impl AppState {
    pub fn new(service: ServiceKind, playlist: PlaylistGenerator, intake: FileIntake) -> Self {
        Self {
            service,
            playlist: Arc::new(playlist),
            intake,
            charts: ChartGenerator::new(),
        }
    }

    pub fn from_settings(service: ServiceKind, settings: &Settings) -> Self {
        let playlist = PlaylistGenerator::new(
            sample_songs(),
            settings.playlist.min_size,
            settings.playlist.max_size,
        );
        Self::new(service, playlist, FileIntake::new(settings.upload.max_bytes))
    }
}

/// Routes served by `service`: health checks plus its one endpoint
pub fn configure_routes(service: ServiceKind) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        health::configure(cfg);
        match service {
            ServiceKind::Playlist => playlist::configure(cfg),
            ServiceKind::Visualizer => analyze::configure(cfg),
        }
    }
}
