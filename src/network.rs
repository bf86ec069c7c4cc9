//! Outbound network policy: every call to the image API goes direct, never
//! through an inherited proxy.

use reqwest::Client;
use std::env;
use std::time::Duration;

use crate::config::OpenAiConfig;
use crate::error::{Result, ServiceError};

pub const PROXY_ENV_VARS: [&str; 6] = [
    "http_proxy",
    "https_proxy",
    "all_proxy",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
];

/// Clears inherited proxy overrides and asserts a universal no-proxy policy
/// for anything else in the process that reads them. Run once at startup.
pub fn sanitize_proxy_env() -> Vec<&'static str> {
    let mut cleared = Vec::new();
    for var in PROXY_ENV_VARS {
        if env::var_os(var).is_some() {
            env::remove_var(var);
            cleared.push(var);
        }
    }
    env::set_var("NO_PROXY", "*");
    env::set_var("no_proxy", "*");

    if !cleared.is_empty() {
        log::warn!("🔌 Cleared proxy environment variables: {:?}", cleared);
    }
    cleared
}

/// The shared HTTP client. Proxy bypass and the request timeout are fixed
/// here, so no per-request environment handling is needed.
pub fn build_http_client(config: &OpenAiConfig) -> Result<Client> {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .user_agent(concat!("stylegen/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ServiceError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}
