use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::{analyze::AnalyzeArgs, rules::RulesCommand};

#[derive(Parser)]
#[command(name = "redline")]
#[command(about = "Red flag analysis for M&A contract documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a contract document and report red flags
    Analyze(AnalyzeArgs),

    /// Inspect the rule catalog
    Rules {
        #[command(subcommand)]
        subcommand: RulesCommand,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(commands::analyze::execute(args))
        }
        Commands::Rules { subcommand } => subcommand.execute(),
    }
}
