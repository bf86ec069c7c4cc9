//! Stylegen: turns a text prompt plus one of fifteen style presets into an
//! illustration through the OpenAI Images API, or a placeholder image when
//! no credential is given or generation fails.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod network;
pub mod openai;
pub mod resolver;
#[cfg(feature = "server")]
pub mod server;

pub use classify::{classify, ErrorCategory};
pub use config::{Config, OpenAiConfig};
pub use error::{Result, ServiceError};
pub use models::*;
pub use openai::{ImageBackend, OpenAiClient};
pub use resolver::RequestResolver;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
