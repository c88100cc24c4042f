//! Failure semantics: the semantic detector never takes the pipeline down,
//! and its chunk loop stays strictly sequential.

use redline_analyzers::core::{FlagSource, RuleConfig};
use redline_analyzers::llm::{
    analyzer::chunk_paragraphs, MockProvider, SemanticAnalyzer, SemanticConfig,
};
use redline_analyzers::runner::CheckRegistry;
use redline_analyzers::{AnalysisPipeline, RuleEngine};
use std::sync::Arc;
use std::time::Duration;

fn rule_engine() -> RuleEngine {
    RuleEngine::new(RuleConfig::default()).with_checks(CheckRegistry::with_defaults().all())
}

#[tokio::test]
async fn test_provider_failure_leaves_rule_findings_intact() {
    let semantic = SemanticAnalyzer::with_config(
        Arc::new(MockProvider::failing()),
        SemanticConfig {
            inter_chunk_delay: Duration::ZERO,
            ..SemanticConfig::default()
        },
    );

    let pipeline = AnalysisPipeline::new(rule_engine(), Some(semantic));
    let report = pipeline
        .analyze(
            "deal.txt",
            "The deferred consideration vests on performance metrics.",
        )
        .await;

    assert!(report.total_flags > 0);
    assert!(report
        .flags
        .iter()
        .all(|f| f.source == FlagSource::RuleEngine));
}

#[tokio::test]
async fn test_every_chunk_gets_exactly_one_call() {
    let provider = Arc::new(MockProvider::new());
    let config = SemanticConfig {
        max_chunk_chars: 120,
        inter_chunk_delay: Duration::ZERO,
        ..SemanticConfig::default()
    };

    let paragraphs: Vec<String> = (0..6).map(|i| format!("clause {i} {}", "x".repeat(100))).collect();
    let text = paragraphs.join("\n\n");
    let expected_chunks = chunk_paragraphs(&text, 120).len();
    assert!(expected_chunks > 1);

    let analyzer = SemanticAnalyzer::with_config(provider.clone(), config);
    analyzer.analyze(&text).await;

    assert_eq!(provider.call_count(), expected_chunks);
}

#[tokio::test]
async fn test_failed_chunks_do_not_stop_later_chunks() {
    // Even with every call failing, the loop visits each chunk once.
    let provider = Arc::new(MockProvider::failing());
    let config = SemanticConfig {
        max_chunk_chars: 120,
        inter_chunk_delay: Duration::ZERO,
        ..SemanticConfig::default()
    };

    let text = (0..4)
        .map(|i| format!("section {i} {}", "y".repeat(100)))
        .collect::<Vec<_>>()
        .join("\n\n");
    let expected_chunks = chunk_paragraphs(&text, 120).len();

    let analyzer = SemanticAnalyzer::with_config(provider.clone(), config);
    let findings = analyzer.analyze(&text).await;

    assert!(findings.is_empty());
    assert_eq!(provider.call_count(), expected_chunks);
}
