//! Customer-concentration detector. Flags revenue concentration above 50%,
//! escalating to CRITICAL above 70%.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::context_window;
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static CONCENTRATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)top\s+\d+\s+customers?.*?(\d+)%").expect("static concentration pattern")
});

const FLAG_THRESHOLD_PERCENT: u64 = 50;
const CRITICAL_THRESHOLD_PERCENT: u64 = 70;

pub struct CustomerConcentrationCheck;

impl CustomerConcentrationCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CustomerConcentrationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for CustomerConcentrationCheck {
    fn id(&self) -> &'static str {
        "customer-concentration"
    }

    fn name(&self) -> &'static str {
        "Customer Concentration Detector"
    }

    fn description(&self) -> &'static str {
        "Flags revenue concentrated in a small number of customers"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let window = context.config().context_chars;
        let mut findings = Vec::new();

        for caps in CONCENTRATION_PATTERN.captures_iter(text) {
            let percentage: u64 = match caps[1].parse() {
                Ok(p) => p,
                Err(_) => continue,
            };
            if percentage <= FLAG_THRESHOLD_PERCENT {
                continue;
            }

            let (severity, score) = if percentage > CRITICAL_THRESHOLD_PERCENT {
                (Severity::Critical, 9)
            } else {
                (Severity::High, 7)
            };

            let whole = caps.get(0).expect("capture 0 always present");
            let snippet = context_window(text, whole.start(), whole.end(), window);

            findings.push(
                Finding::new(
                    FlagCategory::Customer,
                    severity,
                    format!("High Customer Concentration ({percentage}%)"),
                    format!(
                        "Top customers represent {percentage}% of revenue. Loss of any \
                         major customer could be catastrophic."
                    ),
                )
                .with_location(snippet)
                .with_score(score)
                .with_source(FlagSource::RuleEngine)
                .with_recommendation(
                    "Require customer retention agreements, escrow protection, or earnout \
                     tied to customer retention.",
                ),
            );
        }

        Ok(findings)
    }
}
