//! Payment-structure detector: undefined earnout targets and undefined
//! deferred-payment metrics. Two independent sub-patterns with their own
//! severity policies.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::context_window;
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

struct PaymentPattern {
    pattern: &'static LazyLock<Regex>,
    title: &'static str,
    severity: Severity,
    score: i64,
    recommendation: &'static str,
}

static EARNOUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)earnout.*(?:undefined|to be determined|mutually agreed)")
        .expect("static earnout pattern")
});

static DEFERRED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)deferred.*(?:performance metrics|to be determined)")
        .expect("static deferred pattern")
});

static PAYMENT_PATTERNS: &[PaymentPattern] = &[
    PaymentPattern {
        pattern: &EARNOUT_PATTERN,
        title: "Undefined Earnout Targets",
        severity: Severity::Critical,
        score: 10,
        recommendation: "Never accept undefined earnout metrics. Specify exact \
                         EBITDA/revenue targets and calculation methods.",
    },
    PaymentPattern {
        pattern: &DEFERRED_PATTERN,
        title: "Undefined Deferred Payment Terms",
        severity: Severity::High,
        score: 8,
        recommendation: "All deferred payment triggers must be clearly defined at signing.",
    },
];

pub struct PaymentTermCheck;

impl PaymentTermCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PaymentTermCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for PaymentTermCheck {
    fn id(&self) -> &'static str {
        "payment-terms"
    }

    fn name(&self) -> &'static str {
        "Payment Structure Detector"
    }

    fn description(&self) -> &'static str {
        "Flags earnout and deferred-payment terms left undefined at signing"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let window = context.config().context_chars;
        let mut findings = Vec::new();

        for entry in PAYMENT_PATTERNS {
            for m in entry.pattern.find_iter(text) {
                let snippet = context_window(text, m.start(), m.end(), window);

                findings.push(
                    Finding::new(
                        FlagCategory::Financial,
                        entry.severity,
                        entry.title,
                        "Payment terms are incomplete or subject to future agreement. \
                         This creates massive dispute risk.",
                    )
                    .with_location(snippet)
                    .with_score(entry.score)
                    .with_source(FlagSource::RuleEngine)
                    .with_recommendation(entry.recommendation),
                );
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<Finding> {
        PaymentTermCheck::new()
            .scan(&AnalysisContext::new(text))
            .unwrap()
    }

    #[test]
    fn test_undefined_earnout_is_critical() {
        let text = "The earnout payment targets shall be mutually agreed after closing.";
        let findings = scan(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "Undefined Earnout Targets");
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].score, 10);
    }

    #[test]
    fn test_undefined_deferred_terms_are_high() {
        let text = "Deferred consideration is payable upon performance metrics.";
        let findings = scan(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "Undefined Deferred Payment Terms");
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].score, 8);
    }

    #[test]
    fn test_pattern_spans_line_breaks() {
        let text = "The earnout schedule is described below.\nTargets remain to be determined.";
        assert_eq!(scan(text).len(), 1);
    }

    #[test]
    fn test_defined_terms_pass() {
        let text = "The earnout equals 2.5x EBITDA above $4,000,000, computed per Exhibit C.";
        assert!(scan(text).is_empty());
    }
}
