//! HTTP handlers. Each one is a thin adapter from actix extractors to the
//! resolver.

use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;

use crate::{
    catalog,
    error::ServiceError,
    models::{GenerationRequest, HealthStatus},
    server::{error_response, state::AppState},
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .route(web::head().to(health_probe)),
    )
    .route("/styles", web::get().to(list_styles))
    .route("/generate", web::post().to(generate))
    .route("/test-openai", web::get().to(test_openai));
}

pub async fn health_check() -> HttpResponse {
    log::debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        styles_available: catalog::STYLES.len(),
    })
}

/// Load-balancer probe: status only.
pub async fn health_probe() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn list_styles(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.resolver.styles())
}

pub async fn generate(
    state: web::Data<AppState>,
    request: web::Json<GenerationRequest>,
) -> ActixResult<HttpResponse> {
    let request_id = uuid::Uuid::new_v4().to_string();

    match state
        .resolver
        .resolve_with_id(request.into_inner(), request_id.clone())
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(error_response(&e, request_id)),
    }
}

#[derive(Debug, Deserialize)]
pub struct ProbeQuery {
    pub api_key: Option<String>,
}

pub async fn test_openai(
    state: web::Data<AppState>,
    query: web::Query<ProbeQuery>,
) -> ActixResult<HttpResponse> {
    let request_id = uuid::Uuid::new_v4().to_string();
    let api_key = match query.api_key.as_deref() {
        Some(key) => key,
        None => return Ok(error_response(&ServiceError::MissingApiKey, request_id)),
    };

    match state.resolver.probe_credential(api_key).await {
        Ok(probe) => Ok(HttpResponse::Ok().json(probe)),
        Err(e) => Ok(error_response(&e, request_id)),
    }
}
