//! Ollama completion client
//!
//! Speaks the plain generate API: one non-streaming POST per analysis,
//! reading the completion text from the `response` field of the envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::model::ProviderConfig;

use super::{CompletionProvider, ProviderError};

/// Client for an Ollama-compatible generate endpoint
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client from provider configuration
    ///
    /// The request timeout bounds the single provider attempt; a timed-out
    /// call surfaces as a transport error and triggers the fallback.
    pub fn new(config: &ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);

        tracing::debug!(url = %url, model = %self.model, "Requesting completion");

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "model": self.model,
                "prompt": prompt,
                "stream": false,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let envelope: Value = response.json().await?;

        envelope
            .get("response")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .ok_or(ProviderError::MissingCompletion)
    }

    async fn ping(&self) -> Result<(), ProviderError> {
        let url = format!("{}/api/version", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        Ok(())
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OllamaClient {
        OllamaClient::new(&ProviderConfig {
            base_url: base_url.to_string(),
            model: "llama2".to_string(),
            timeout_secs: 5,
        })
    }

    #[tokio::test]
    async fn complete_reads_response_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(
                serde_json::json!({"model": "llama2", "stream": false}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"model": "llama2", "response": "  {\"isHarassment\": true}  "}),
            ))
            .mount(&server)
            .await;

        let completion = test_client(&server.uri())
            .complete("analyze this")
            .await
            .unwrap();
        assert_eq!(completion, "{\"isHarassment\": true}");
    }

    #[tokio::test]
    async fn non_success_status_is_a_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).complete("analyze this").await;
        assert!(matches!(result, Err(ProviderError::Status(_))));
    }

    #[tokio::test]
    async fn envelope_without_response_field_is_missing_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"done": true})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).complete("analyze this").await;
        assert!(matches!(result, Err(ProviderError::MissingCompletion)));
    }

    #[tokio::test]
    async fn ping_checks_the_version_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/version"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": "0.5.0"})),
            )
            .mount(&server)
            .await;

        assert!(test_client(&server.uri()).ping().await.is_ok());
    }
}
