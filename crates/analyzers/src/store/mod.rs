//! File-backed report persistence.
//!
//! Reports are stored as pretty-printed JSON keyed by their id. The caller
//! (the pipeline/CLI) treats save failures as non-fatal: the Report has
//! already been computed and is still returned.

use crate::core::Report;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ReportStore {
    root: PathBuf,
}

impl ReportStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn save(&self, report: &Report) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create report directory {}", self.root.display()))?;

        let path = self.path_for(&report.id);
        let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write report {}", path.display()))?;

        Ok(path)
    }

    /// Returns the stored report, or None when the id was never saved.
    pub fn load(&self, id: &str) -> Result<Option<Report>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("failed to read report {}", path.display()))?;
        let report = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse report {}", path.display()))?;

        Ok(Some(report))
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}
