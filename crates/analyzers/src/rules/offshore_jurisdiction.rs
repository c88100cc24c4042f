//! Offshore jurisdiction detector.
//!
//! Severity escalates when the jurisdiction appears near governing-law or
//! dispute-resolution language, since that is where forum choice actually
//! binds the parties.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::{context_window, lexicon};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static JURISDICTION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    lexicon::OFFSHORE_JURISDICTIONS
        .iter()
        .map(|name| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(name));
            (*name, Regex::new(&pattern).expect("static jurisdiction pattern"))
        })
        .collect()
});

const ESCALATION_KEYWORDS: &[&str] = &["governing law", "arbitration", "dispute resolution"];

pub struct OffshoreJurisdictionCheck;

impl OffshoreJurisdictionCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OffshoreJurisdictionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for OffshoreJurisdictionCheck {
    fn id(&self) -> &'static str {
        "offshore-jurisdiction"
    }

    fn name(&self) -> &'static str {
        "Offshore Jurisdiction Detector"
    }

    fn description(&self) -> &'static str {
        "Flags references to offshore jurisdictions, escalating near governing-law language"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let window = context.config().context_chars;
        let mut findings = Vec::new();

        for (name, pattern) in JURISDICTION_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                let snippet = context_window(text, m.start(), m.end(), window);
                let lowered = snippet.to_lowercase();
                let escalated = ESCALATION_KEYWORDS.iter().any(|k| lowered.contains(k));

                let (severity, score) = if escalated {
                    (Severity::Critical, 9)
                } else {
                    (Severity::High, 7)
                };

                findings.push(
                    Finding::new(
                        FlagCategory::Jurisdiction,
                        severity,
                        format!("Offshore Jurisdiction: {name}"),
                        format!(
                            "Document references {name}, which may indicate jurisdiction \
                             shopping or regulatory arbitrage."
                        ),
                    )
                    .with_location(snippet)
                    .with_score(score)
                    .with_source(FlagSource::RuleEngine)
                    .with_recommendation(
                        "Require arbitration in a neutral jurisdiction (Delaware, New York, \
                         or London). Investigate why the offshore jurisdiction was chosen.",
                    ),
                );
            }
        }

        Ok(findings)
    }
}
