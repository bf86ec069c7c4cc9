//! HTTP server: actix-web wiring around the request resolver.

pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

use actix_web::{
    error::JsonPayloadError,
    http::StatusCode,
    middleware::{DefaultHeaders, Logger},
    web, App, HttpRequest, HttpResponse, HttpServer as ActixHttpServer,
};

use crate::{
    config::Config,
    error::{Result, ServiceError},
    models::ErrorEnvelope,
    openai,
};
use state::AppState;

pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidStyle { .. }
        | ServiceError::InvalidSize(_)
        | ServiceError::MissingApiKey => StatusCode::BAD_REQUEST,
        ServiceError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ServiceError::ImageApi { .. }
        | ServiceError::RequestError(_)
        | ServiceError::ResponseError(_) => StatusCode::BAD_GATEWAY,
        ServiceError::ConfigError(_) | ServiceError::SerializationError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn error_response(err: &ServiceError, request_id: String) -> HttpResponse {
    let mut envelope = ErrorEnvelope::new(err.kind(), err.to_string());
    envelope.request_id = request_id;
    if let ServiceError::InvalidStyle { available, .. } = err {
        envelope = envelope.with_available_styles(available.clone());
    }

    if err.is_validation() {
        log::warn!(request_id = envelope.request_id.as_str(); "Rejected request: {}", err);
    } else {
        log::error!(request_id = envelope.request_id.as_str(); "Request failed: {}", err);
    }

    HttpResponse::build(status_for(err)).json(envelope)
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        error_response(self, uuid::Uuid::new_v4().to_string())
    }
}

/// Malformed or incomplete JSON bodies get the same envelope as other
/// validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            let envelope = ErrorEnvelope::new("invalid_request", err.to_string());
            log::warn!("Rejected request body: {}", err);
            let response = HttpResponse::BadRequest().json(envelope);
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

pub struct HttpServer {
    config: Config,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let backend = openai::backend(&config.openai)?;

        Ok(Self {
            config,
            state: AppState::new(backend),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.bind_address();
        let state = web::Data::new(self.state);

        log::info!("Starting HTTP server on {}", bind_addr);

        let server = ActixHttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .app_data(json_config())
                .wrap(Logger::new("%r %s %Dms"))
                .wrap(DefaultHeaders::new().add(("Server", "stylegen")))
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .map_err(|e| ServiceError::ConfigError(format!("Failed to bind {}: {}", bind_addr, e)))?
        .run();

        server
            .await
            .map_err(|e| ServiceError::ConfigError(format!("Server error: {}", e)))?;

        log::info!("HTTP server stopped");
        Ok(())
    }
}
