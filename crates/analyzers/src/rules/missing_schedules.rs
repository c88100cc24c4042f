//! Incomplete-schedules detector.
//!
//! Emits at most one finding per document: the first incomplete-schedule
//! indicator found wins, and the location is the regex-captured window
//! around it rather than the usual two-sided context helper.

use crate::core::{AnalysisContext, Finding, FlagCategory, FlagSource, RuleCheck, Severity};
use crate::rules::lexicon;
use anyhow::Result;
use regex::Regex;

pub struct MissingScheduleCheck;

impl MissingScheduleCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MissingScheduleCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCheck for MissingScheduleCheck {
    fn id(&self) -> &'static str {
        "missing-schedules"
    }

    fn name(&self) -> &'static str {
        "Incomplete Schedules Detector"
    }

    fn description(&self) -> &'static str {
        "Flags documents whose schedules or exhibits are not yet complete"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let text = context.text();
        let lowered = text.to_lowercase();
        let window = context.config().schedule_context_chars;

        for indicator in lexicon::MISSING_SCHEDULE_INDICATORS {
            if !lowered.contains(indicator) {
                continue;
            }

            // `.` stops at line breaks, so the captured window never spans
            // paragraphs.
            let pattern = Regex::new(&format!(
                r"(?i).{{0,{window}}}{}.{{0,{window}}}",
                regex::escape(indicator)
            ))?;

            if let Some(m) = pattern.find(text) {
                return Ok(vec![Finding::new(
                    FlagCategory::MissingInfo,
                    Severity::Critical,
                    "Missing or Incomplete Schedules",
                    format!(
                        "Schedules are incomplete: '{indicator}'. Never sign with missing \
                         schedules."
                    ),
                )
                .with_location(m.as_str())
                .with_score(10)
                .with_source(FlagSource::RuleEngine)
                .with_recommendation(
                    "Require all schedules to be completed and attached before signing. \
                     Missing schedules = unknown liabilities.",
                )]);
            }
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<Finding> {
        MissingScheduleCheck::new()
            .scan(&AnalysisContext::new(text))
            .unwrap()
    }

    #[test]
    fn test_at_most_one_finding() {
        let text = "Schedule 3.1 is being finalized. Schedule 4.2 will be attached. \
                    Schedule 5.5 is being compiled.";
        let findings = scan(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].score, 10);
    }

    #[test]
    fn test_first_indicator_in_catalog_order_wins() {
        let text = "Schedule A will be attached. Schedule B is being finalized.";
        let findings = scan(text);
        assert!(findings[0].description.contains("being finalized"));
    }

    #[test]
    fn test_location_is_captured_window() {
        let text = "The financial statements in Schedule 2.4 are being compiled by the auditors.";
        let findings = scan(text);
        assert!(findings[0].location.contains("being compiled"));
        assert!(findings[0].location.contains("Schedule 2.4"));
    }

    #[test]
    fn test_complete_schedules_pass() {
        assert!(scan("All schedules were delivered and attached at signing.").is_empty());
    }
}
