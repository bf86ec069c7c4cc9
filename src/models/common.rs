use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::ErrorCategory;

/// Body returned for requests rejected before any generation work.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub mode: &'static str,
    pub request_id: String,
    pub error_type: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_styles: Option<Vec<String>>,
}

impl ErrorEnvelope {
    pub fn new(error_type: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: "error",
            mode: "error",
            request_id: uuid::Uuid::new_v4().to_string(),
            error_type: error_type.into(),
            error: error.into(),
            available_styles: None,
        }
    }

    pub fn with_available_styles(mut self, styles: Vec<String>) -> Self {
        self.available_styles = Some(styles);
        self
    }
}

/// Outcome of probing a credential against the model-listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CredentialProbe {
    Accepted {
        status: &'static str,
        valid: bool,
        models_available: usize,
        message: String,
    },
    Rejected {
        status: &'static str,
        valid: bool,
        error_type: ErrorCategory,
        error: String,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub styles_available: usize,
}

// OpenAI wire format shared by all endpoints

#[derive(Debug, Deserialize)]
pub struct OpenAiErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiErrorBody {
    pub error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiModel {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiModelList {
    pub data: Vec<OpenAiModel>,
}
