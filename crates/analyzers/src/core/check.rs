use crate::core::{AnalysisContext, Finding, Severity};
use anyhow::Result;

/// A deterministic pattern check over the full document text.
///
/// Checks are independent and side-effect free: a single invocation is a pure
/// function of the context, and every check runs unconditionally regardless of
/// what the others find.
pub trait RuleCheck: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    /// Nominal severity for catalog listings; individual findings may
    /// escalate above or below this.
    fn severity(&self) -> Severity;

    fn scan(&self, context: &AnalysisContext) -> Result<Vec<Finding>>;
}
