use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;

use crate::core::{FileFormat, FileIntake};
use crate::error::ApiError;
use crate::models::AnalyzeResponse;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analyze-data", web::post().to(analyze_data));
}

/// Analyze data endpoint
///
/// POST /analyze-data
///
/// Multipart form fields:
/// - file: CSV, XLS or XLSX upload
/// - query: free text question about the data
///
/// The upload is parsed to prove it is well formed and then dropped; the
/// returned charts are synthetic.
async fn analyze_data(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut query = String::new();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(mut field) = payload.try_next().await.map_err(invalid_form)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "query" => {
                let bytes = read_field(&mut field, &state.intake).await?;
                query = String::from_utf8(bytes)
                    .map_err(|_| ApiError::BadRequest("Query must be valid UTF-8 text".to_string()))?;
            }
            "file" => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();
                FileFormat::from_filename(&filename)?;
                let bytes = read_field(&mut field, &state.intake).await?;
                upload = Some((filename, bytes));
            }
            other => {
                tracing::warn!("Ignoring unknown multipart field: {}", other);
                while field.try_next().await.map_err(invalid_form)?.is_some() {}
            }
        }
    }

    if query.trim().is_empty() {
        tracing::warn!("Rejected analyze request with empty query");
        return Err(ApiError::BadRequest("Query cannot be empty".to_string()));
    }

    let (filename, bytes) = upload.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    tracing::info!("Validating upload {} ({} bytes)", filename, bytes.len());

    let intake = state.intake;
    let table = web::block(move || intake.parse(&filename, &bytes))
        .await
        .map_err(|e| {
            tracing::error!("Upload parsing task failed: {}", e);
            ApiError::Internal(format!("Failed to analyze data: {}", e))
        })?
        .map_err(|e| {
            tracing::warn!("Upload rejected: {}", e);
            ApiError::from(e)
        })?;

    tracing::debug!("Upload parsed: {} rows x {} columns", table.rows, table.columns);

    let charts = state.charts.generate(&mut rand::thread_rng());

    Ok(HttpResponse::Ok().json(AnalyzeResponse { charts, query }))
}

/// Read a multipart field fully into memory, bounded by the upload limit
async fn read_field(field: &mut Field, intake: &FileIntake) -> Result<Vec<u8>, ApiError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(invalid_form)? {
        intake.check_size(buf.len() + chunk.len())?;
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

fn invalid_form(err: actix_multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(format!("Invalid multipart form: {}", err))
}
