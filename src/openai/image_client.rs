use crate::{
    config::OpenAiConfig,
    error::{Result, ServiceError},
    models::{GeneratedImage, OpenAiImageRequest, OpenAiImageResponse},
};
use reqwest::{header, Client};

use super::{bearer, error_from_response};

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl ImageClient {
    pub fn new(client: Client, config: &OpenAiConfig) -> Self {
        Self {
            client,
            endpoint: format!("{}/images/generations", config.base_url),
            model: config.image_model.clone(),
        }
    }

    pub async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        size: &str,
        quality: &str,
    ) -> Result<GeneratedImage> {
        let payload = OpenAiImageRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: size.to_string(),
            quality: quality.to_string(),
        };

        log::info!("Generating image with model: {}", self.model);
        log::debug!("Image request: size={} quality={}", size, quality);

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, bearer(api_key))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: OpenAiImageResponse = response.json().await?;
        let first = body
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::ResponseError("No images returned".into()))?;

        let url = first
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ServiceError::ResponseError("Image response carried no URL".into()))?;

        Ok(GeneratedImage {
            url,
            revised_prompt: first.revised_prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ImageClient {
        let config = OpenAiConfig::new().with_base_url(format!("{}/v1", server.uri()));
        let http = crate::network::build_http_client(&config).unwrap();
        ImageClient::new(http, &config)
    }

    #[tokio::test]
    async fn test_generate_returns_first_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header_eq("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "dall-e-3",
                "n": 1,
                "size": "1024x1024",
                "quality": "hd"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "created": 1700000000,
                "data": [{
                    "url": "https://cdn.example.com/img.png",
                    "revised_prompt": "a castle, fantasy"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let image = client_for(&server)
            .generate("sk-test", "fantasy art: a castle", "1024x1024", "hd")
            .await
            .unwrap();
        assert_eq!(image.url, "https://cdn.example.com/img.png");
        assert_eq!(image.revised_prompt.as_deref(), Some("a castle, fantasy"));
    }

    #[tokio::test]
    async fn test_generate_maps_openai_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Incorrect API key provided: sk-bad.",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("sk-bad", "p", "1024x1024", "standard")
            .await
            .unwrap_err();
        match err {
            ServiceError::ImageApi { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided: sk-bad. (invalid_api_key)");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("sk-test", "p", "1024x1024", "standard")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ResponseError(_)));
    }

    #[tokio::test]
    async fn test_generate_plain_text_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("sk-test", "p", "1024x1024", "standard")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error code: 503 - upstream overloaded");
    }
}
