use crate::core::{Finding, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The final aggregated analysis value. Created once per run and read-only
/// thereafter: it is what gets persisted, displayed, and exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,

    pub document_name: String,

    pub analyzed_at: DateTime<Utc>,

    pub processing_time_seconds: f64,

    pub total_flags: usize,

    pub critical_count: usize,

    pub high_count: usize,

    pub medium_count: usize,

    pub low_count: usize,

    /// Severity-weighted average of individual scores, in [0,10].
    pub overall_risk_score: f64,

    /// Deduplicated findings, CRITICAL first, score descending within a tier.
    pub flags: Vec<Finding>,
}

impl Report {
    pub fn count_for(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical_count,
            Severity::High => self.high_count,
            Severity::Medium => self.medium_count,
            Severity::Low => self.low_count,
        }
    }

    /// Banded label for the overall risk score.
    pub fn risk_level(&self) -> &'static str {
        if self.overall_risk_score >= 8.0 {
            "EXTREME RISK"
        } else if self.overall_risk_score >= 6.0 {
            "HIGH RISK"
        } else if self.overall_risk_score >= 4.0 {
            "MODERATE RISK"
        } else if self.overall_risk_score >= 2.0 {
            "LOW RISK"
        } else {
            "MINIMAL RISK"
        }
    }
}
