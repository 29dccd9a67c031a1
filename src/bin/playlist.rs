use hackmix::{server, ServiceKind};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    server::run(ServiceKind::Playlist).await
}
