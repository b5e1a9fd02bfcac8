//! Harassment analysis orchestration
//!
//! Tries the completion provider once, repairs whatever it returns, and
//! degrades to the keyword classifier on any failure. `analyze` is total:
//! no provider outage, malformed completion, or garbage input ever reaches
//! the caller as an error.

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::model::ClassificationResult;
use crate::provider::{CompletionProvider, ProviderError};
use crate::service::{keywords, legal, prompts, validate};

/// Analysis service combining the provider path and the keyword fallback
pub struct AnalysisService {
    provider: Arc<dyn CompletionProvider>,
    json_region: Regex,
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            // Greedy first-brace-to-last-brace region; completions often
            // wrap the JSON object in prose.
            json_region: Regex::new(r"(?s)\{.*\}").unwrap(),
        }
    }

    /// Classify the given incident text
    pub async fn analyze(&self, text: &str) -> ClassificationResult {
        let candidate = match self.provider_classification(text).await {
            Ok(result) => {
                tracing::debug!(model = %self.provider.model(), "Provider classification succeeded");
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "Provider classification failed, using keyword fallback");
                self.fallback(text)
            }
        };

        validate::normalize(candidate)
    }

    async fn provider_classification(
        &self,
        text: &str,
    ) -> Result<ClassificationResult, ProviderError> {
        let prompt = prompts::build_analysis_prompt(text);
        let completion = self.provider.complete(&prompt).await?;

        let region = self
            .json_region
            .find(&completion)
            .ok_or(ProviderError::NoJsonRegion)?;

        let value: Value = serde_json::from_str(region.as_str())
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(validate::from_value(&value))
    }

    fn fallback(&self, text: &str) -> ClassificationResult {
        let classification = keywords::classify(text);
        let legal_info = legal::legal_info_for(&classification.harassment_type);
        classification.with_legal_info(legal_info)
    }
}
