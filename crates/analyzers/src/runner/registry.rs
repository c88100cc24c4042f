use crate::core::{RuleCheck, Severity};
use crate::rules::{
    AuditDateCheck, CustomerConcentrationCheck, DeferredDisclosureCheck, LiabilitySurvivalCheck,
    MissingScheduleCheck, OffshoreJurisdictionCheck, PaymentTermCheck, WeaselWordCheck,
};
use std::sync::Arc;

/// Holds the rule catalog. Registration order is the order checks are listed
/// and, under sequential execution, the order they run.
pub struct CheckRegistry {
    checks: Vec<Arc<dyn RuleCheck>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// The full built-in catalog.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(OffshoreJurisdictionCheck::new());
        registry.register(WeaselWordCheck::new());
        registry.register(DeferredDisclosureCheck::new());
        registry.register(MissingScheduleCheck::new());
        registry.register(AuditDateCheck::new());
        registry.register(PaymentTermCheck::new());
        registry.register(LiabilitySurvivalCheck::new());
        registry.register(CustomerConcentrationCheck::new());
        registry
    }

    pub fn register<C: RuleCheck + 'static>(&mut self, check: C) {
        self.checks.push(Arc::new(check));
    }

    pub fn all(&self) -> Vec<Arc<dyn RuleCheck>> {
        self.checks.clone()
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn RuleCheck>> {
        self.checks.iter().find(|c| c.id() == id).cloned()
    }

    pub fn list(&self) -> Vec<CheckInfo> {
        self.checks
            .iter()
            .map(|c| CheckInfo {
                id: c.id().to_string(),
                name: c.name().to_string(),
                description: c.description().to_string(),
                severity: c.severity(),
            })
            .collect()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct CheckInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let registry = CheckRegistry::with_defaults();
        let mut ids: Vec<_> = registry.list().into_iter().map(|c| c.id).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = CheckRegistry::with_defaults();
        assert!(registry.get("missing-schedules").is_some());
        assert!(registry.get("nonexistent").is_none());
    }
}
