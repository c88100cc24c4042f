use crate::core::{AnalysisContext, Finding, RuleCheck, RuleConfig};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::warn;

/// Runs every registered check over one document.
///
/// Checks are independent and read-only over the same text, so the engine can
/// fan them out on the rayon pool. A check that fails internally contributes
/// no findings; the remaining checks still run to completion, and the engine
/// itself never fails.
pub struct RuleEngine {
    checks: Vec<Arc<dyn RuleCheck>>,
    config: RuleConfig,
}

impl RuleEngine {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            checks: Vec::new(),
            config,
        }
    }

    pub fn add_check<C: RuleCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn with_checks(mut self, checks: Vec<Arc<dyn RuleCheck>>) -> Self {
        self.checks.extend(checks);
        self
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    pub fn run(&self, text: &str) -> Vec<Finding> {
        let context = AnalysisContext::with_config(text, self.config.clone());

        if self.config.parallel_execution {
            self.checks
                .par_iter()
                .filter_map(|check| match check.scan(&context) {
                    Ok(findings) => Some(findings),
                    Err(e) => {
                        warn!(check = check.id(), error = %e, "rule check failed");
                        None
                    }
                })
                .flatten()
                .collect()
        } else {
            let mut all_findings = Vec::new();
            for check in &self.checks {
                match check.scan(&context) {
                    Ok(findings) => all_findings.extend(findings),
                    Err(e) => warn!(check = check.id(), error = %e, "rule check failed"),
                }
            }
            all_findings
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FlagCategory, FlagSource, Severity};
    use crate::runner::CheckRegistry;
    use anyhow::anyhow;

    struct FailingCheck;

    impl RuleCheck for FailingCheck {
        fn id(&self) -> &'static str {
            "failing"
        }

        fn name(&self) -> &'static str {
            "Always Fails"
        }

        fn severity(&self) -> Severity {
            Severity::Low
        }

        fn scan(&self, _context: &AnalysisContext) -> anyhow::Result<Vec<Finding>> {
            Err(anyhow!("internal failure"))
        }
    }

    #[test]
    fn test_failed_check_does_not_abort_others() {
        let engine = RuleEngine::new(RuleConfig::default())
            .add_check(FailingCheck)
            .with_checks(CheckRegistry::with_defaults().all());

        let findings = engine.run("The earnout targets are to be determined after closing.");
        assert!(!findings.is_empty());
        assert!(findings.iter().all(|f| f.source == FlagSource::RuleEngine));
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let text = "Governed by the laws of the Cayman Islands. Earnout to be determined. \
                    Top 3 customers represent 80% of revenue.";

        let parallel = RuleEngine::new(RuleConfig::default())
            .with_checks(CheckRegistry::with_defaults().all())
            .run(text);

        let sequential_config = RuleConfig {
            parallel_execution: false,
            ..RuleConfig::default()
        };
        let sequential = RuleEngine::new(sequential_config)
            .with_checks(CheckRegistry::with_defaults().all())
            .run(text);

        assert_eq!(parallel.len(), sequential.len());
        let mut p: Vec<_> = parallel.iter().map(|f| f.title.clone()).collect();
        let mut s: Vec<_> = sequential.iter().map(|f| f.title.clone()).collect();
        p.sort();
        s.sort();
        assert_eq!(p, s);
    }

    #[test]
    fn test_clean_document_yields_no_findings() {
        let engine =
            RuleEngine::new(RuleConfig::default()).with_checks(CheckRegistry::with_defaults().all());
        let findings = engine.run("This agreement is governed by Delaware law.");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_run_is_deterministic() {
        let text = "Arbitration before courts of Bermuda under the governing law of Bermuda.";
        let engine =
            RuleEngine::new(RuleConfig::default()).with_checks(CheckRegistry::with_defaults().all());

        let a: Vec<_> = engine.run(text).iter().map(|f| f.title.clone()).collect();
        let b: Vec<_> = engine.run(text).iter().map(|f| f.title.clone()).collect();
        assert_eq!(a, b);

        let first = engine.run(text);
        assert!(first
            .iter()
            .all(|f| f.category == FlagCategory::Jurisdiction));
    }
}
