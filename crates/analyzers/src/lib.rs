//! Redline Analyzers - Contract Red Flag Detection
//!
//! This crate provides a rule-based detection catalog, an LLM-backed semantic
//! pass, and the aggregation engine that merges both finding streams into a
//! scored due-diligence report.

pub mod aggregator;
pub mod core;
pub mod document;
pub mod llm;
pub mod render;
pub mod rules;
pub mod runner;
pub mod store;

pub mod pipeline;

pub use crate::core::{
    AnalysisContext, Finding, FlagCategory, FlagSource, Report, RuleCheck, RuleConfig, Severity,
};

pub use aggregator::{Aggregator, AggregatorConfig};

pub use runner::{CheckInfo, CheckRegistry, RuleEngine};

pub use rules::{
    AuditDateCheck, CustomerConcentrationCheck, DeferredDisclosureCheck, LiabilitySurvivalCheck,
    MissingScheduleCheck, OffshoreJurisdictionCheck, PaymentTermCheck, WeaselWordCheck,
};

pub use llm::{SemanticAnalyzer, SemanticConfig};

pub use pipeline::AnalysisPipeline;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
