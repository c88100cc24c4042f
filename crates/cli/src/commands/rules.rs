//! Rule catalog inspection.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use redline_analyzers::runner::CheckRegistry;

#[derive(Subcommand, Clone)]
pub enum RulesCommand {
    /// List every check in the built-in catalog
    List,
}

impl RulesCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            RulesCommand::List => list_checks(),
        }
    }
}

fn list_checks() -> Result<()> {
    let registry = CheckRegistry::with_defaults();
    let checks = registry.list();

    println!("{}", format!("{} rule checks registered", checks.len()).bold());
    println!();

    for check in checks {
        println!(
            "{}  {}  [{}]",
            check.id.bright_cyan(),
            check.name,
            check.severity
        );
        println!("    {}", check.description.dimmed());
    }

    Ok(())
}
