//! Completion provider seam for the external language model

mod ollama;

use async_trait::async_trait;

pub use ollama::OllamaClient;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Provider envelope contains no completion text")]
    MissingCompletion,

    #[error("No JSON object found in completion")]
    NoJsonRegion,

    #[error("Failed to parse completion JSON: {0}")]
    Parse(String),
}

/// Trait for completion providers
///
/// The analysis service only ever makes a single attempt through this seam;
/// every failure is recovered by the keyword fallback.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion for the given prompt and return its raw text
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Probe provider availability (used by the readiness endpoint)
    async fn ping(&self) -> Result<(), ProviderError>;

    /// The model this provider completes with
    fn model(&self) -> &str;
}
