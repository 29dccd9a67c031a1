use actix_web::{web, HttpResponse, Responder};

use crate::models::{HealthResponse, MessageResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

/// Root endpoint, reports which service is running
async fn root(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: format!("{} is running!", state.service.display_name()),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}
