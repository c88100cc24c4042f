use crate::core::{FlagCategory, FlagSource, Severity};
use serde::{Deserialize, Serialize};

/// Number of description characters that participate in the dedup key.
pub const DEDUP_DESCRIPTION_CHARS: usize = 100;

/// A single detected issue. Immutable once created: the aggregator only
/// drops duplicates and reorders, it never rewrites a finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,

    pub category: FlagCategory,

    pub severity: Severity,

    pub title: String,

    pub description: String,

    /// Verbatim quoted context from the source text.
    pub location: String,

    /// Detector-assigned risk weight, always within [1,10].
    pub score: u8,

    pub source: FlagSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Finding {
    pub fn new(
        category: FlagCategory,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            severity,
            title: title.into(),
            description: description.into(),
            location: String::new(),
            score: 5,
            source: FlagSource::RuleEngine,
            recommendation: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the risk score, clamped to [1,10] regardless of detector output.
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score.clamp(1, 10) as u8;
        self
    }

    pub fn with_source(mut self, source: FlagSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Comparison key for near-duplicate detection: lowercased title plus the
    /// first [`DEDUP_DESCRIPTION_CHARS`] characters of the description. The
    /// quoted location never participates.
    pub fn dedup_key(&self) -> String {
        let head: String = self.description.chars().take(DEDUP_DESCRIPTION_CHARS).collect();
        format!("{}|{}", self.title.to_lowercase(), head.to_lowercase())
    }
}
