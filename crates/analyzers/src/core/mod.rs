//! Core abstractions shared by the detection and aggregation layers.
//!
//! The `RuleCheck` trait defines the interface every deterministic check
//! implements, `Finding` is the immutable unit of output both detector kinds
//! produce, and `Report` is the final aggregated value handed back to callers.

pub mod check;
pub mod context;
pub mod finding;
pub mod report;
pub mod severity;

pub use check::RuleCheck;
pub use context::{AnalysisContext, RuleConfig};
pub use finding::Finding;
pub use report::Report;
pub use severity::{FlagCategory, FlagSource, Severity};
