//! Canonical classification records returned by the analysis API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity of a detected harassment incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Penalty range for a harassment category under NSW law
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PunishmentRange {
    pub min: String,
    pub max: String,
    pub details: String,
}

/// Statute citation for a harassment category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LawSection {
    pub act: String,
    pub section: String,
    pub link: String,
    pub description: String,
}

/// Legal record attached to a classification, keyed by harassment type
#[derive(Debug, Clone, PartialEq)]
pub struct LegalInfo {
    pub punishment_range: PunishmentRange,
    pub law_section: LawSection,
}

/// The canonical analysis result
///
/// Field names are serialized in camelCase: this is the wire shape the
/// analysis endpoint returns and the exact JSON shape the language model
/// is prompted to emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_harassment: bool,
    pub confidence: f64,
    pub harassment_type: String,
    pub severity: Severity,
    pub keywords: Vec<String>,
    pub description: String,
    pub legal_implications: String,
    pub recommended_actions: Vec<String>,
    pub punishment_range: PunishmentRange,
    pub law_section: LawSection,
}

/// Output of the keyword classifier, before the legal record is joined
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordClassification {
    pub is_harassment: bool,
    pub confidence: f64,
    pub harassment_type: String,
    pub severity: Severity,
    pub keywords: Vec<String>,
    pub description: String,
    pub legal_implications: String,
    pub recommended_actions: Vec<String>,
}

impl KeywordClassification {
    /// Attach a legal record to produce the full canonical result
    pub fn with_legal_info(self, legal: LegalInfo) -> ClassificationResult {
        ClassificationResult {
            is_harassment: self.is_harassment,
            confidence: self.confidence,
            harassment_type: self.harassment_type,
            severity: self.severity,
            keywords: self.keywords,
            description: self.description,
            legal_implications: self.legal_implications,
            recommended_actions: self.recommended_actions,
            punishment_range: legal.punishment_range,
            law_section: legal.law_section,
        }
    }
}

/// Request body for the analysis endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Free-text description of the incident
    pub text: String,
}
