//! Outdated-audit detector.
//!
//! Matches "audit"/"audited" followed within the same sentence (up to 50
//! characters, stopping at a period) by a year. The century prefix is
//! matched literally; the captured two-digit suffix is normalized with a
//! pivot so "19xx"/"20xx" both resolve correctly.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::context_window;
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static AUDIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)audit(?:ed)?[^.]{0,50}(?:19|20)(\d{2})").expect("static audit pattern")
});

/// Two-digit years above the pivot resolve to the 1900s, the rest to the 2000s.
const CENTURY_PIVOT: u32 = 50;

/// Audits older than this many full calendar years are flagged.
const MAX_AUDIT_AGE_YEARS: i32 = 2;

pub struct AuditDateCheck;

impl AuditDateCheck {
    pub fn new() -> Self {
        Self
    }

    fn normalize_year(suffix: u32) -> i32 {
        if suffix > CENTURY_PIVOT {
            1900 + suffix as i32
        } else {
            2000 + suffix as i32
        }
    }
}

impl Default for AuditDateCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for AuditDateCheck {
    fn id(&self) -> &'static str {
        "audit-dates"
    }

    fn name(&self) -> &'static str {
        "Outdated Audit Detector"
    }

    fn description(&self) -> &'static str {
        "Flags financial audits dated more than two years before the reference year"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let config = context.config();
        let mut findings = Vec::new();

        for caps in AUDIT_PATTERN.captures_iter(text) {
            let suffix: u32 = caps[1].parse()?;
            let year = Self::normalize_year(suffix);

            if year >= config.reference_year - MAX_AUDIT_AGE_YEARS {
                continue;
            }

            let whole = caps.get(0).expect("capture 0 always present");
            let snippet = context_window(text, whole.start(), whole.end(), config.context_chars);

            findings.push(
                Finding::new(
                    FlagCategory::Financial,
                    Severity::High,
                    format!("Outdated Financial Audit ({year})"),
                    format!(
                        "Most recent audit mentioned is from {year}, which is too old to \
                         be reliable."
                    ),
                )
                .with_location(snippet)
                .with_score(7)
                .with_source(FlagSource::RuleEngine)
                .with_recommendation(
                    "Require current audited financials (within 12 months). Outdated \
                     audits hide recent problems.",
                ),
            );
        }

        Ok(findings)
    }
}
