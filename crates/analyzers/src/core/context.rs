use chrono::{Datelike, Utc};

/// Tuning constants for the rule catalog. The context window sizes are
/// inherited defaults, kept configurable rather than baked into the checks.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Run independent checks on the rayon pool instead of sequentially.
    pub parallel_execution: bool,
    /// Characters of context captured on each side of a match.
    pub context_chars: usize,
    /// Narrower window used by the incomplete-schedules check.
    pub schedule_context_chars: usize,
    /// Calendar year audits are measured against. Injected so the
    /// outdated-audit check stays a pure function of its inputs.
    pub reference_year: i32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            parallel_execution: true,
            context_chars: 150,
            schedule_context_chars: 100,
            reference_year: Utc::now().year(),
        }
    }
}

/// Read-only view of one document handed to every rule check. No shared
/// mutable state: each analysis run builds its own context.
pub struct AnalysisContext {
    text: String,
    config: RuleConfig,
}

impl AnalysisContext {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            config: RuleConfig::default(),
        }
    }

    pub fn with_config(text: impl Into<String>, config: RuleConfig) -> Self {
        Self {
            text: text.into(),
            config,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }
}
