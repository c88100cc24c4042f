//! Chunked, throttled semantic analysis.
//!
//! Chunks are processed strictly sequentially with an enforced delay between
//! calls. The external dependency is rate limited; the serialization here is
//! the throttle, and must not be parallelized.

use crate::core::Finding;
use crate::llm::prompts;
use crate::llm::provider::{LlmProvider, LlmRequest};
use crate::llm::response;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SemanticConfig {
    /// Upper bound on chunk size in characters. Splits happen on paragraph
    /// boundaries; a single oversized paragraph becomes its own chunk.
    pub max_chunk_chars: usize,
    /// Pause between consecutive chunk calls. Zero in tests.
    pub inter_chunk_delay: Duration,
    /// Per-call ceiling; a chunk that exceeds it yields no findings.
    pub request_timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 15_000,
            inter_chunk_delay: Duration::from_millis(500),
            request_timeout: Duration::from_secs(60),
            temperature: 0.2,
            max_tokens: 4000,
        }
    }
}

pub struct SemanticAnalyzer {
    provider: Arc<dyn LlmProvider>,
    config: SemanticConfig,
}

impl SemanticAnalyzer {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            config: SemanticConfig::default(),
        }
    }

    pub fn with_config(provider: Arc<dyn LlmProvider>, config: SemanticConfig) -> Self {
        Self { provider, config }
    }

    /// Analyzes the whole document. Any per-chunk failure, timeout included,
    /// degrades that chunk to zero findings; the loop always runs to the end
    /// and this method never fails.
    pub async fn analyze(&self, text: &str) -> Vec<Finding> {
        let chunks = chunk_paragraphs(text, self.config.max_chunk_chars);
        debug!(chunks = chunks.len(), model = self.provider.model_name(), "semantic pass");

        let mut all_findings = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            if index > 0 && !self.config.inter_chunk_delay.is_zero() {
                tokio::time::sleep(self.config.inter_chunk_delay).await;
            }

            let request = LlmRequest {
                system_prompt: prompts::ANALYSIS_SYSTEM_PROMPT.to_string(),
                user_prompt: prompts::analysis_user_prompt(chunk),
                temperature: self.config.temperature,
                max_tokens: self.config.max_tokens,
            };

            match tokio::time::timeout(self.config.request_timeout, self.provider.complete(request))
                .await
            {
                Ok(Ok(resp)) => {
                    let findings = response::parse_findings(&resp.content);
                    debug!(chunk = index, findings = findings.len(), "chunk analyzed");
                    all_findings.extend(findings);
                }
                Ok(Err(e)) => {
                    warn!(chunk = index, error = %e, "semantic call failed, skipping chunk");
                }
                Err(_) => {
                    warn!(
                        chunk = index,
                        timeout_secs = self.config.request_timeout.as_secs(),
                        "semantic call timed out, skipping chunk"
                    );
                }
            }
        }

        all_findings
    }
}

/// Splits text into chunks of at most `max_chars` characters, breaking only
/// on blank-line paragraph boundaries so no paragraph is split mid-sentence.
pub fn chunk_paragraphs(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for paragraph in text.split("\n\n") {
        let paragraph_len = paragraph.chars().count();

        if current_len + paragraph_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current.push_str(paragraph);
            current_len = paragraph_len;
        } else {
            if !current.is_empty() {
                current.push_str("\n\n");
                current_len += 2;
            }
            current.push_str(paragraph);
            current_len += paragraph_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
