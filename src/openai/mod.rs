pub mod image_client;
pub mod models_client;

use crate::{
    config::OpenAiConfig,
    error::{Result, ServiceError},
    models::{GeneratedImage, OpenAiErrorBody},
    network,
};
use async_trait::async_trait;
use reqwest::Response;

pub use image_client::ImageClient;
pub use models_client::ModelsClient;

/// The external image-generation service as seen by the resolver.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Generates exactly one image and returns its URL.
    async fn generate_image(
        &self,
        api_key: &str,
        prompt: &str,
        size: &str,
        quality: &str,
    ) -> Result<GeneratedImage>;

    /// Lists the models visible to `api_key`; used as a credential probe.
    async fn list_models(&self, api_key: &str) -> Result<Vec<String>>;
}

#[derive(Clone)]
pub struct OpenAiClient {
    image_client: ImageClient,
    models_client: ModelsClient,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let client = network::build_http_client(config)?;

        log::debug!("OpenAI client ready for {}", config.base_url);

        Ok(Self {
            image_client: ImageClient::new(client.clone(), config),
            models_client: ModelsClient::new(client, config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn models(&self) -> &ModelsClient {
        &self.models_client
    }
}

#[async_trait]
impl ImageBackend for OpenAiClient {
    async fn generate_image(
        &self,
        api_key: &str,
        prompt: &str,
        size: &str,
        quality: &str,
    ) -> Result<GeneratedImage> {
        self.image_client
            .generate(api_key, prompt, size, quality)
            .await
    }

    async fn list_models(&self, api_key: &str) -> Result<Vec<String>> {
        self.models_client.list(api_key).await
    }
}

/// Turns a non-2xx response into `ImageApi`, preferring the message from
/// OpenAI's `{"error": {...}}` body over the raw text.
pub(crate) async fn error_from_response(response: Response) -> ServiceError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<OpenAiErrorBody>(&body) {
        Ok(parsed) => {
            let mut message = parsed.error.message;
            if let Some(code) = parsed.error.code.as_ref().and_then(|c| c.as_str()) {
                message.push_str(&format!(" ({})", code));
            }
            message
        }
        Err(_) if !body.trim().is_empty() => body,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    ServiceError::ImageApi {
        status: status.as_u16(),
        message,
    }
}

pub(crate) fn bearer(api_key: &str) -> String {
    format!("Bearer {}", api_key)
}

/// Convenience constructor for callers that only need the trait object.
pub fn backend(config: &OpenAiConfig) -> Result<std::sync::Arc<dyn ImageBackend>> {
    Ok(std::sync::Arc::new(OpenAiClient::new(config)?))
}
