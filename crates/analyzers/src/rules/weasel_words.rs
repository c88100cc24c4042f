//! Vague-language detector.
//!
//! Occasional hedging is normal contract drafting; the check only fires when
//! a term appears more than three times across the whole document. One
//! finding per term, with the occurrence count embedded in the title.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::{context_window, lexicon};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static WEASEL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    lexicon::WEASEL_WORDS
        .iter()
        .map(|term| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            (*term, Regex::new(&pattern).expect("static weasel pattern"))
        })
        .collect()
});

/// Occurrence count a term must exceed before it is flagged.
const EXCESS_THRESHOLD: usize = 3;

pub struct WeaselWordCheck;

impl WeaselWordCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeaselWordCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for WeaselWordCheck {
    fn id(&self) -> &'static str {
        "weasel-words"
    }

    fn name(&self) -> &'static str {
        "Vague Language Detector"
    }

    fn description(&self) -> &'static str {
        "Flags non-committal terms used more than three times across the document"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let window = context.config().context_chars;
        let mut findings = Vec::new();

        for (term, pattern) in WEASEL_PATTERNS.iter() {
            let matches: Vec<_> = pattern.find_iter(text).collect();
            if matches.len() <= EXCESS_THRESHOLD {
                continue;
            }

            let first = &matches[0];
            let snippet = context_window(text, first.start(), first.end(), window);

            findings.push(
                Finding::new(
                    FlagCategory::VagueLanguage,
                    Severity::Medium,
                    format!("Excessive Vague Language: '{term}' ({}x)", matches.len()),
                    format!(
                        "Term '{term}' appears {} times. Vague language creates ambiguity \
                         and potential for disputes.",
                        matches.len()
                    ),
                )
                .with_location(snippet)
                .with_score(5)
                .with_source(FlagSource::RuleEngine)
                .with_recommendation(format!(
                    "Request specific definitions and thresholds. Replace '{term}' with \
                     measurable criteria."
                )),
            );
        }

        Ok(findings)
    }
}
