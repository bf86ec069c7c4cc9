use std::env;

use crate::error::{Result, ServiceError};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub image_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai: OpenAiConfig,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let image_model = env::var("OPENAI_IMAGE_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or(defaults.image_model);
        let timeout_secs = env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        OpenAiConfig {
            base_url,
            image_model,
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8000,
            openai: OpenAiConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = env::var("HOST").ok().unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port);

        Config {
            host,
            port,
            openai: OpenAiConfig::from_env(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_openai(mut self, config: OpenAiConfig) -> Self {
        self.openai = config;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.openai.timeout_secs == 0 {
            return Err(ServiceError::ConfigError(
                "OPENAI_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }
        if !self.openai.base_url.starts_with("http://")
            && !self.openai.base_url.starts_with("https://")
        {
            return Err(ServiceError::ConfigError(format!(
                "OPENAI_BASE_URL must be an http(s) URL, got '{}'",
                self.openai.base_url
            )));
        }
        Ok(())
    }
}
