//! Merging, deduplication, ordering, and scoring of findings.
//!
//! Rule findings and semantic findings enter as two streams; one Report
//! leaves. Deduplication is per category: the same underlying issue flagged
//! under two categories deliberately survives as two findings.

use crate::core::{Finding, FlagCategory, Report, Severity};
use chrono::Utc;
use std::collections::{HashMap, HashSet};

/// Tuning constants for the aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Jaccard similarity at or above which two comparison keys in the same
    /// category are duplicates.
    pub similarity_threshold: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
        }
    }
}

pub struct Aggregator {
    config: AggregatorConfig,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            config: AggregatorConfig::default(),
        }
    }

    pub fn with_config(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Combines both finding streams into the final report. Pure over its
    /// inputs apart from the fresh id and timestamp; never fails: empty
    /// inputs degrade to an empty report with a zero risk score.
    pub fn aggregate(
        &self,
        document_name: &str,
        rule_flags: Vec<Finding>,
        llm_flags: Vec<Finding>,
        processing_time_seconds: f64,
    ) -> Report {
        let mut all_flags = rule_flags;
        all_flags.extend(llm_flags);

        let mut flags = self.deduplicate(all_flags);

        // CRITICAL first; equal severity resolves by score, descending. The
        // sort is stable, so equal (severity, score) pairs keep merge order.
        flags.sort_by(|a, b| b.severity.cmp(&a.severity).then(b.score.cmp(&a.score)));

        let mut counts: HashMap<Severity, usize> = HashMap::new();
        for flag in &flags {
            *counts.entry(flag.severity).or_insert(0) += 1;
        }

        let overall_risk_score = self.risk_score(&flags);

        Report {
            id: uuid::Uuid::new_v4().to_string(),
            document_name: document_name.to_string(),
            analyzed_at: Utc::now(),
            processing_time_seconds: round2(processing_time_seconds),
            total_flags: flags.len(),
            critical_count: counts.get(&Severity::Critical).copied().unwrap_or(0),
            high_count: counts.get(&Severity::High).copied().unwrap_or(0),
            medium_count: counts.get(&Severity::Medium).copied().unwrap_or(0),
            low_count: counts.get(&Severity::Low).copied().unwrap_or(0),
            overall_risk_score,
            flags,
        }
    }

    /// Drops near-duplicates within each category, keeping first occurrences.
    ///
    /// Findings are walked in merge order; a candidate is compared against
    /// every already-accepted key in its own category and dropped when any
    /// comparison reaches the similarity threshold. Cross-category
    /// comparisons never happen.
    fn deduplicate(&self, flags: Vec<Finding>) -> Vec<Finding> {
        let mut seen: HashMap<FlagCategory, Vec<String>> = HashMap::new();
        let mut kept = Vec::with_capacity(flags.len());

        for flag in flags {
            let key = flag.dedup_key();
            let category_keys = seen.entry(flag.category).or_default();

            let duplicate = category_keys
                .iter()
                .any(|accepted| jaccard(&key, accepted) >= self.config.similarity_threshold);

            if !duplicate {
                category_keys.push(key);
                kept.push(flag);
            }
        }

        kept
    }

    /// Severity-weighted average of the individual scores. A single CRITICAL
    /// finding dominates many LOW findings by construction.
    fn risk_score(&self, flags: &[Finding]) -> f64 {
        if flags.is_empty() {
            return 0.0;
        }

        let mut weighted_sum = 0u64;
        let mut total_weight = 0u64;
        for flag in flags {
            let weight = flag.severity.weight() as u64;
            weighted_sum += flag.score as u64 * weight;
            total_weight += weight;
        }

        round2(weighted_sum as f64 / total_weight as f64)
    }
}

/// Word-level Jaccard similarity between two comparison keys. Empty token
/// sets never match anything.
fn jaccard(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    intersection as f64 / union as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
