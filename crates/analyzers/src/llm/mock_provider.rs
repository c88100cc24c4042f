//! Deterministic provider for tests: canned JSON payloads keyed by substring
//! of the user prompt, a failure mode, and a call counter so tests can assert
//! the sequential chunk loop actually serializes.

use crate::llm::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse, TokenUsage};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockProvider {
    responses: Vec<(String, String)>,
    default_response: String,
    call_count: AtomicUsize,
    should_fail: bool,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            default_response: "[]".to_string(),
            call_count: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        let mut provider = Self::new();
        provider.should_fail = true;
        provider
    }

    /// Returns `json` whenever the user prompt contains `pattern`.
    pub fn with_response(mut self, pattern: &str, json: &str) -> Self {
        self.responses.push((pattern.to_string(), json.to_string()));
        self
    }

    /// Returned when no pattern matches; defaults to an empty array.
    pub fn with_default_response(mut self, json: &str) -> Self {
        self.default_response = json.to_string();
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            return Err(LlmError::Api("mock provider configured to fail".to_string()));
        }

        let content = self
            .responses
            .iter()
            .find(|(pattern, _)| request.user_prompt.contains(pattern))
            .map(|(_, json)| json.clone())
            .unwrap_or_else(|| self.default_response.clone());

        Ok(LlmResponse {
            content,
            model: "mock-model".to_string(),
            usage: TokenUsage {
                prompt_tokens: 100,
                completion_tokens: 50,
                total_tokens: 150,
            },
        })
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
