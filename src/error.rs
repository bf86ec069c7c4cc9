use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid style '{style}'. Available: {}", .available.join(", "))]
    InvalidStyle {
        style: String,
        available: Vec<String>,
    },
    #[error("Invalid size '{0}'. Expected '{{width}}x{{height}}', e.g. '1024x1024'")]
    InvalidSize(String),
    #[error("An api_key query parameter is required")]
    MissingApiKey,
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Upstream rejected the call. Rendered the way the OpenAI SDKs render it
    /// so the fallback classifier sees familiar text.
    #[error("Error code: {status} - {message}")]
    ImageApi { status: u16, message: String },
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl ServiceError {
    /// Short machine-readable tag used in error envelopes.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::InvalidStyle { .. } => "invalid_style",
            ServiceError::InvalidSize(_) => "invalid_size",
            ServiceError::MissingApiKey => "missing_api_key",
            ServiceError::ConfigError(_) => "config_error",
            ServiceError::RequestError(_) => "request_error",
            ServiceError::ResponseError(_) => "response_error",
            ServiceError::SerializationError(_) => "serialization_error",
            ServiceError::ImageApi { .. } => "image_api_error",
            ServiceError::Timeout(_) => "timeout",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidStyle { .. }
                | ServiceError::InvalidSize(_)
                | ServiceError::MissingApiKey
        )
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        // The URL is stripped: endpoint paths like `/images/generations`
        // would otherwise trip the keyword classifier.
        if e.is_timeout() {
            ServiceError::Timeout(e.without_url().to_string())
        } else if e.is_decode() {
            ServiceError::ResponseError(e.without_url().to_string())
        } else {
            ServiceError::RequestError(e.without_url().to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
