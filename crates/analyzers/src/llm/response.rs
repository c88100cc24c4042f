//! Normalization of untrusted model output into well-formed findings.
//!
//! Nothing about the response shape is guaranteed: the payload may be a bare
//! array, an object carrying a `flags` array, or a single object; individual
//! fields may be missing, mistyped, or out of range. Every coercion here has
//! a defined fallback, and a malformed item is skipped without affecting its
//! siblings.

use crate::core::{Finding, FlagCategory, FlagSource, Severity};
use serde_json::Value;
use tracing::warn;

/// Longest quoted context retained from model output.
const MAX_QUOTE_CHARS: usize = 500;

const DEFAULT_SCORE: i64 = 5;

/// Parses one raw model response into findings. Unparseable payloads yield
/// an empty list, never an error.
pub fn parse_findings(content: &str) -> Vec<Finding> {
    let stripped = strip_code_fences(content);

    let value: Value = match serde_json::from_str(stripped) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "semantic response is not valid JSON, dropping");
            return Vec::new();
        }
    };

    let items: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("flags") {
            Some(Value::Array(items)) => items,
            Some(other) => vec![other],
            None => vec![Value::Object(obj)],
        },
        other => {
            warn!(kind = json_kind(&other), "unexpected semantic response shape, dropping");
            return Vec::new();
        }
    };

    items.iter().filter_map(normalize_item).collect()
}

fn normalize_item(item: &Value) -> Option<Finding> {
    let obj = item.as_object()?;

    let category = obj
        .get("category")
        .and_then(Value::as_str)
        .map(FlagCategory::from_label)
        .unwrap_or(FlagCategory::Other);

    let severity = obj
        .get("severity")
        .and_then(Value::as_str)
        .map(Severity::from_label)
        .unwrap_or(Severity::Medium);

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Unspecified Issue");

    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let quote = obj
        .get("quote")
        .and_then(Value::as_str)
        .or_else(|| obj.get("location").and_then(Value::as_str))
        .unwrap_or_default();
    let location: String = quote.chars().take(MAX_QUOTE_CHARS).collect();

    let score = obj.get("score").map(coerce_score).unwrap_or(DEFAULT_SCORE);

    let mut finding = Finding::new(category, severity, title, description)
        .with_location(location)
        .with_score(score)
        .with_source(FlagSource::LlmAnalyzer);

    if let Some(recommendation) = obj.get("recommendation").and_then(Value::as_str) {
        finding = finding.with_recommendation(recommendation);
    }

    Some(finding)
}

/// Accepts integers, floats (truncated), and numeric strings; anything else
/// falls back to the default. Clamping to [1,10] happens in the builder.
fn coerce_score(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(DEFAULT_SCORE),
        Value::String(s) => s.trim().parse().unwrap_or(DEFAULT_SCORE),
        _ => DEFAULT_SCORE,
    }
}

fn strip_code_fences(content: &str) -> &str {
    let mut text = content.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array_parses() {
        let content = r#"[{"category": "financial", "severity": "HIGH", "title": "T",
                           "description": "D", "quote": "Q", "score": 8}]"#;
        let findings = parse_findings(content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FlagCategory::Financial);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].score, 8);
        assert_eq!(findings[0].source, FlagSource::LlmAnalyzer);
    }

    #[test]
    fn test_flags_object_parses() {
        let content = r#"{"flags": [{"title": "One"}, {"title": "Two"}]}"#;
        let findings = parse_findings(content);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].title, "One");
    }

    #[test]
    fn test_single_object_wraps_into_one_finding() {
        let content = r#"{"title": "Lone", "severity": "LOW"}"#;
        let findings = parse_findings(content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Low);
    }

    #[test]
    fn test_markdown_fences_are_stripped() {
        let content = "```json\n[{\"title\": \"Fenced\"}]\n```";
        let findings = parse_findings(content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "Fenced");
    }

    #[test]
    fn test_garbage_yields_empty() {
        assert!(parse_findings("not json at all").is_empty());
        assert!(parse_findings("42").is_empty());
        assert!(parse_findings("\"just a string\"").is_empty());
    }

    #[test]
    fn test_unknown_severity_normalizes_to_medium() {
        let content = r#"[{"title": "T", "severity": "CATASTROPHIC"}]"#;
        let findings = parse_findings(content);
        assert_eq!(findings[0].severity, Severity::Medium);
    }

    #[test]
    fn test_missing_category_normalizes_to_other() {
        let content = r#"[{"title": "T"}]"#;
        let findings = parse_findings(content);
        assert_eq!(findings[0].category, FlagCategory::Other);
    }

    #[test]
    fn test_score_out_of_range_is_clamped() {
        let content = r#"[{"title": "big", "score": 99}, {"title": "small", "score": -4}]"#;
        let findings = parse_findings(content);
        assert_eq!(findings[0].score, 10);
        assert_eq!(findings[1].score, 1);
    }

    #[test]
    fn test_unparseable_score_defaults_to_five() {
        let content = r#"[{"title": "a", "score": "banana"},
                          {"title": "b", "score": {"nested": true}},
                          {"title": "c"}]"#;
        let findings = parse_findings(content);
        assert!(findings.iter().all(|f| f.score == 5));
    }

    #[test]
    fn test_numeric_string_score_parses() {
        let content = r#"[{"title": "T", "score": "7"}]"#;
        assert_eq!(parse_findings(content)[0].score, 7);
    }

    #[test]
    fn test_quote_truncated_to_limit() {
        let long_quote = "q".repeat(900);
        let content = format!(r#"[{{"title": "T", "quote": "{long_quote}"}}]"#);
        let findings = parse_findings(&content);
        assert_eq!(findings[0].location.chars().count(), 500);
    }

    #[test]
    fn test_location_field_is_fallback_for_quote() {
        let content = r#"[{"title": "T", "location": "fallback context"}]"#;
        assert_eq!(parse_findings(content)[0].location, "fallback context");
    }

    #[test]
    fn test_missing_title_gets_placeholder() {
        let content = r#"[{"description": "only a description"}]"#;
        assert_eq!(parse_findings(content)[0].title, "Unspecified Issue");
    }

    #[test]
    fn test_non_object_items_are_skipped() {
        let content = r#"[{"title": "keep"}, "drop me", 17, null]"#;
        let findings = parse_findings(content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "keep");
    }
}
