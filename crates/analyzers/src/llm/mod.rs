//! The semantic detection pass.
//!
//! The language model is an untrusted oracle behind the [`LlmProvider`]
//! trait: whatever shape it returns is normalized and clamped in
//! [`response`] before a finding enters the shared pipeline, and every
//! provider failure degrades to an empty finding list.

pub mod analyzer;
pub mod mock_provider;
pub mod prompts;
pub mod provider;
pub mod response;

#[cfg(feature = "llm")]
pub mod openai;

pub use analyzer::{SemanticAnalyzer, SemanticConfig};
pub use mock_provider::MockProvider;
pub use provider::{LlmError, LlmProvider, LlmRequest, LlmResponse, TokenUsage};

#[cfg(feature = "llm")]
pub use openai::OpenAiProvider;
