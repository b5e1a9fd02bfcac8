//! Defensive normalization of classification results
//!
//! Every candidate result, whether parsed from a provider completion or
//! produced by the keyword fallback, passes through here before it reaches
//! the caller. Shape repair (`from_value`) never fails; range repair
//! (`normalize`) is idempotent.

use serde_json::Value;

use crate::model::{ClassificationResult, LawSection, PunishmentRange, Severity};

const DEFAULT_DESCRIPTION: &str = "Analysis completed";
const DEFAULT_LEGAL_IMPLICATIONS: &str = "Legal analysis pending";

/// Build a result from an arbitrary JSON value, defaulting every field
/// that is missing or has the wrong shape
pub fn from_value(raw: &Value) -> ClassificationResult {
    ClassificationResult {
        is_harassment: coerce_bool(raw.get("isHarassment")),
        confidence: coerce_confidence(raw.get("confidence")),
        harassment_type: non_empty_string(raw.get("harassmentType"), "None"),
        severity: coerce_severity(raw.get("severity")),
        keywords: string_sequence(raw.get("keywords")),
        description: non_empty_string(raw.get("description"), DEFAULT_DESCRIPTION),
        legal_implications: non_empty_string(raw.get("legalImplications"), DEFAULT_LEGAL_IMPLICATIONS),
        recommended_actions: string_sequence(raw.get("recommendedActions")),
        punishment_range: coerce_punishment_range(raw.get("punishmentRange")),
        law_section: coerce_law_section(raw.get("lawSection")),
    }
}

/// Clamp and default the fields of a candidate result
///
/// Idempotent: normalizing an already-normalized result yields an
/// identical result.
pub fn normalize(mut result: ClassificationResult) -> ClassificationResult {
    if !result.confidence.is_finite() {
        result.confidence = 0.5;
    }
    result.confidence = result.confidence.clamp(0.0, 1.0);

    if result.harassment_type.is_empty() {
        result.harassment_type = "None".to_string();
    }
    if result.description.is_empty() {
        result.description = DEFAULT_DESCRIPTION.to_string();
    }
    if result.legal_implications.is_empty() {
        result.legal_implications = DEFAULT_LEGAL_IMPLICATIONS.to_string();
    }

    result
}

fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

fn coerce_confidence(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.5),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.5),
        _ => 0.5,
    }
}

fn coerce_severity(value: Option<&Value>) -> Severity {
    match value.and_then(Value::as_str) {
        Some("low") => Severity::Low,
        Some("medium") => Severity::Medium,
        Some("high") => Severity::High,
        _ => Severity::Low,
    }
}

fn non_empty_string(value: Option<&Value>, default: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

fn string_sequence(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn field_string(value: Option<&Value>, field: &str, default: &str) -> String {
    non_empty_string(value.and_then(|v| v.get(field)), default)
}

fn coerce_punishment_range(value: Option<&Value>) -> PunishmentRange {
    PunishmentRange {
        min: field_string(value, "min", "Warning"),
        max: field_string(value, "max", "Fine or imprisonment"),
        details: field_string(
            value,
            "details",
            "Penalty depends on severity and circumstances",
        ),
    }
}

fn coerce_law_section(value: Option<&Value>) -> LawSection {
    LawSection {
        act: field_string(value, "act", "Relevant NSW Act"),
        section: field_string(value, "section", "Specific section"),
        link: field_string(value, "link", "https://www.legislation.nsw.gov.au/"),
        description: field_string(
            value,
            "description",
            "Legal provision covering this offense",
        ),
    }
}
