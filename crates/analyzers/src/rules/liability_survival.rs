//! Short-survival-period detector. Representations surviving less than
//! twelve months leave the buyer little time to discover breaches; the
//! numeric period is treated as months regardless of stated units.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::context_window;
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static SURVIVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:surviv|representations).*?(\d+)\s*(?:months?|days?)")
        .expect("static survival pattern")
});

/// Periods below this many months are flagged.
const MIN_SURVIVAL_MONTHS: u64 = 12;

pub struct LiabilitySurvivalCheck;

impl LiabilitySurvivalCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiabilitySurvivalCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for LiabilitySurvivalCheck {
    fn id(&self) -> &'static str {
        "liability-survival"
    }

    fn name(&self) -> &'static str {
        "Survival Period Detector"
    }

    fn description(&self) -> &'static str {
        "Flags representation survival periods shorter than twelve months"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let window = context.config().context_chars;
        let mut findings = Vec::new();

        for caps in SURVIVAL_PATTERN.captures_iter(text) {
            let period: u64 = match caps[1].parse() {
                Ok(p) => p,
                Err(_) => continue,
            };
            if period >= MIN_SURVIVAL_MONTHS {
                continue;
            }

            let whole = caps.get(0).expect("capture 0 always present");
            let snippet = context_window(text, whole.start(), whole.end(), window);

            findings.push(
                Finding::new(
                    FlagCategory::Liability,
                    Severity::High,
                    format!("Short Survival Period ({period} months)"),
                    format!(
                        "Representations survive only {period} months. Industry standard \
                         is 18-24 months minimum."
                    ),
                )
                .with_location(snippet)
                .with_score(7)
                .with_source(FlagSource::RuleEngine)
                .with_recommendation(format!(
                    "Negotiate longer survival period (minimum 18 months). {period} months \
                     is insufficient for most issues to surface."
                )),
            );
        }

        Ok(findings)
    }
}
