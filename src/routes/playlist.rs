use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::{handle_json_payload_error, ApiError};
use crate::models::{PlaylistResponse, VibeRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .route("/generate-playlist", web::post().to(generate_playlist));
}

/// Generate playlist endpoint
///
/// POST /generate-playlist
///
/// Request body:
/// ```json
/// { "vibe": "string" }
/// ```
async fn generate_playlist(
    state: web::Data<AppState>,
    req: web::Json<VibeRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Rejected playlist request: {}", errors);
        return Err(ApiError::BadRequest("Vibe description cannot be empty".to_string()));
    }

    let playlist = state
        .playlist
        .generate(&req.vibe, &mut rand::thread_rng())
        .map_err(|e| {
            tracing::error!("Playlist generation failed: {}", e);
            ApiError::from(e)
        })?;

    tracing::info!("Generated playlist of {} songs", playlist.len());

    Ok(HttpResponse::Ok().json(PlaylistResponse {
        playlist,
        vibe: req.into_inner().vibe,
    }))
}
