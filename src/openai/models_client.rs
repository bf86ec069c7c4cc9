use crate::{config::OpenAiConfig, error::Result, models::OpenAiModelList};
use reqwest::{header, Client};

use super::{bearer, error_from_response};

#[derive(Clone)]
pub struct ModelsClient {
    client: Client,
    endpoint: String,
}

impl ModelsClient {
    pub fn new(client: Client, config: &OpenAiConfig) -> Self {
        Self {
            client,
            endpoint: format!("{}/models", config.base_url),
        }
    }

    pub async fn list(&self, api_key: &str) -> Result<Vec<String>> {
        log::debug!("Listing models at {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, bearer(api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let list: OpenAiModelList = response.json().await?;
        Ok(list.data.into_iter().map(|model| model.id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use serde_json::json;
    use wiremock::matchers::{header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ModelsClient {
        let config = OpenAiConfig::new().with_base_url(server.uri());
        let http = crate::network::build_http_client(&config).unwrap();
        ModelsClient::new(http, &config)
    }

    #[tokio::test]
    async fn test_list_models() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header_eq("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": [
                    {"id": "dall-e-3", "object": "model"},
                    {"id": "gpt-4o", "object": "model"}
                ]
            })))
            .mount(&server)
            .await;

        let models = client_for(&server).list("sk-test").await.unwrap();
        assert_eq!(models, vec!["dall-e-3".to_string(), "gpt-4o".to_string()]);
    }

    #[tokio::test]
    async fn test_list_models_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).list("sk-bad").await.unwrap_err();
        assert!(matches!(err, ServiceError::ImageApi { status: 401, .. }));
        assert_eq!(err.to_string(), "Error code: 401 - Unauthorized");
    }
}
