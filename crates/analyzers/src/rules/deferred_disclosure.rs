//! Deferred-disclosure detector. Unlike the vague-language check, a single
//! occurrence is enough: any of these phrases means information is missing
//! at signing time.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::{context_window, lexicon};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static PHRASE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    lexicon::HIGH_RISK_PHRASES
        .iter()
        .map(|phrase| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase));
            (*phrase, Regex::new(&pattern).expect("static phrase pattern"))
        })
        .collect()
});

pub struct DeferredDisclosureCheck;

impl DeferredDisclosureCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeferredDisclosureCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for DeferredDisclosureCheck {
    fn id(&self) -> &'static str {
        "deferred-disclosure"
    }

    fn name(&self) -> &'static str {
        "Deferred Disclosure Detector"
    }

    fn description(&self) -> &'static str {
        "Flags phrases indicating information is deferred past signing"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let window = context.config().context_chars;
        let mut findings = Vec::new();

        for (phrase, pattern) in PHRASE_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                let snippet = context_window(text, m.start(), m.end(), window);

                findings.push(
                    Finding::new(
                        FlagCategory::MissingInfo,
                        Severity::High,
                        format!("Deferred Disclosure: '{phrase}'"),
                        "Critical information is deferred or incomplete. This is a major \
                         red flag - you're signing before having full information.",
                    )
                    .with_location(snippet)
                    .with_score(8)
                    .with_source(FlagSource::RuleEngine)
                    .with_recommendation(
                        "STOP. Do not sign until all referenced information is provided \
                         and reviewed. No post-closing surprises.",
                    ),
                );
            }
        }

        Ok(findings)
    }
}
