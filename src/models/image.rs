use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classify::ErrorCategory;
use crate::error::ServiceError;

pub const DEFAULT_STYLE: &str = "fantasy";
pub const DEFAULT_SIZE: &str = "1024x1024";
pub const DEFAULT_QUALITY: &str = "standard";

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_size() -> String {
    DEFAULT_SIZE.to_string()
}

fn default_quality() -> String {
    DEFAULT_QUALITY.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub text: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_size")]
    pub size: String,
    #[serde(default = "default_quality")]
    pub quality: String,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: default_style(),
            api_key: None,
            size: default_size(),
            quality: default_quality(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    /// The credential, if one was supplied and is not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for ImageSize {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ServiceError::InvalidSize(s.to_string());
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return Err(invalid());
        }

        let width: u32 = parts[0].parse().map_err(|_| invalid())?;
        let height: u32 = parts[1].parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(ImageSize { width, height })
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Mode-specific part of a generation result, tagged by `mode` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Demo,
    Generated {
        quality: String,
        prompt_used: String,
    },
    Fallback {
        quality: String,
        error_type: ErrorCategory,
        error: String,
        recovery_strategy: &'static str,
    },
}

impl GenerationOutcome {
    pub fn mode(&self) -> &'static str {
        match self {
            GenerationOutcome::Demo => "demo",
            GenerationOutcome::Generated { .. } => "generated",
            GenerationOutcome::Fallback { .. } => "fallback",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub status: &'static str,
    pub request_id: String,
    #[serde(flatten)]
    pub outcome: GenerationOutcome,
    pub image_url: String,
    pub message: String,
    pub style: String,
    pub style_name: String,
    pub size: String,
    /// Wall-clock seconds spent resolving the request.
    pub generation_time: f64,
}

// OpenAI Images API wire format

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
    pub quality: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiImageData {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiImageResponse {
    pub data: Vec<OpenAiImageData>,
}

/// What a backend hands back for a successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
}
