//! End-to-end analysis of one document.
//!
//! The rule pass and the semantic pass are independent and read-only over
//! the same text, so they run concurrently; the semantic pass serializes its
//! own chunks internally. Only extraction failures upstream of this type are
//! hard errors: by the time text reaches the pipeline, analysis always
//! produces a Report.

use crate::aggregator::Aggregator;
use crate::core::{Finding, Report};
use crate::llm::SemanticAnalyzer;
use crate::runner::RuleEngine;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct AnalysisPipeline {
    engine: Arc<RuleEngine>,
    semantic: Option<SemanticAnalyzer>,
    aggregator: Aggregator,
}

impl AnalysisPipeline {
    /// `semantic` is None in rule-only mode (no provider configured, or the
    /// caller disabled the LLM pass).
    pub fn new(engine: RuleEngine, semantic: Option<SemanticAnalyzer>) -> Self {
        Self {
            engine: Arc::new(engine),
            semantic,
            aggregator: Aggregator::new(),
        }
    }

    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub async fn analyze(&self, document_name: &str, text: &str) -> Report {
        let started = Instant::now();

        let engine = Arc::clone(&self.engine);
        let rule_text = text.to_string();
        let rule_task = tokio::task::spawn_blocking(move || engine.run(&rule_text));

        let llm_flags: Vec<Finding> = match &self.semantic {
            Some(analyzer) => analyzer.analyze(text).await,
            None => Vec::new(),
        };

        let rule_flags = match rule_task.await {
            Ok(flags) => flags,
            Err(e) => {
                warn!(error = %e, "rule pass panicked, continuing with semantic findings only");
                Vec::new()
            }
        };

        info!(
            document = document_name,
            rule_flags = rule_flags.len(),
            llm_flags = llm_flags.len(),
            "detection passes complete"
        );

        self.aggregator.aggregate(
            document_name,
            rule_flags,
            llm_flags,
            started.elapsed().as_secs_f64(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FlagSource, RuleConfig, Severity};
    use crate::llm::{MockProvider, SemanticConfig};
    use crate::runner::CheckRegistry;
    use std::time::Duration;

    fn rule_engine() -> RuleEngine {
        RuleEngine::new(RuleConfig::default()).with_checks(CheckRegistry::with_defaults().all())
    }

    fn fast_semantic(provider: MockProvider) -> SemanticAnalyzer {
        SemanticAnalyzer::with_config(
            Arc::new(provider),
            SemanticConfig {
                inter_chunk_delay: Duration::ZERO,
                ..SemanticConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn test_rule_only_mode() {
        let pipeline = AnalysisPipeline::new(rule_engine(), None);
        let report = pipeline
            .analyze("deal.txt", "The earnout targets are to be determined later.")
            .await;

        assert!(report.total_flags > 0);
        assert!(report
            .flags
            .iter()
            .all(|f| f.source == FlagSource::RuleEngine));
    }

    #[tokio::test]
    async fn test_semantic_failure_degrades_to_rule_only() {
        let pipeline = AnalysisPipeline::new(rule_engine(), Some(fast_semantic(MockProvider::failing())));
        let report = pipeline
            .analyze("deal.txt", "Top 4 customers represent 88% of revenue.")
            .await;

        assert!(report.total_flags > 0);
        assert!(report
            .flags
            .iter()
            .all(|f| f.source == FlagSource::RuleEngine));
    }

    #[tokio::test]
    async fn test_streams_merge_and_order() {
        let provider = MockProvider::new().with_default_response(
            r#"[{"category": "legal", "severity": "LOW", "title": "Boilerplate indemnity",
                "description": "Standard but worth confirming scope.", "score": 2}]"#,
        );
        let pipeline = AnalysisPipeline::new(rule_engine(), Some(fast_semantic(provider)));

        let report = pipeline
            .analyze(
                "deal.txt",
                "Disputes settle by arbitration in the Cayman Islands under its governing law.",
            )
            .await;

        assert!(report.critical_count >= 1);
        assert_eq!(report.low_count, 1);
        assert_eq!(report.flags.first().unwrap().severity, Severity::Critical);
        assert_eq!(report.flags.last().unwrap().severity, Severity::Low);
        assert!(report
            .flags
            .iter()
            .any(|f| f.source == FlagSource::LlmAnalyzer));
    }

    #[tokio::test]
    async fn test_clean_document_zero_report() {
        let pipeline = AnalysisPipeline::new(rule_engine(), None);
        let report = pipeline
            .analyze("clean.txt", "Simple services agreement under Delaware law.")
            .await;

        assert_eq!(report.total_flags, 0);
        assert_eq!(report.overall_risk_score, 0.0);
        assert_eq!(report.document_name, "clean.txt");
    }
}
