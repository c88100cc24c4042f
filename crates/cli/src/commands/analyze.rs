//! Full analysis command: extract, run both detector passes, aggregate,
//! render, optionally persist.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

use redline_analyzers::core::RuleConfig;
use redline_analyzers::document;
use redline_analyzers::llm::{OpenAiProvider, SemanticAnalyzer};
use redline_analyzers::render;
use redline_analyzers::runner::CheckRegistry;
use redline_analyzers::store::ReportStore;
use redline_analyzers::{AnalysisPipeline, RuleEngine};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Contract document to analyze (.txt or .md export)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the rendered report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the semantic pass and run rules only
    #[arg(long)]
    pub no_llm: bool,

    #[arg(long, default_value = "gpt-4o")]
    pub model: String,

    /// Falls back to the OPENAI_API_KEY environment variable
    #[arg(long)]
    pub openai_api_key: Option<String>,

    /// Persist the report as JSON under this directory
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    if args.verbose {
        println!("{}", "Analyzing contract document...".bright_blue());
        println!("Input: {}", args.input.display());
    }

    let doc = document::extract_text(&args.input)
        .with_context(|| format!("failed to extract text from {}", args.input.display()))?;

    let engine =
        RuleEngine::new(RuleConfig::default()).with_checks(CheckRegistry::with_defaults().all());

    let semantic = if args.no_llm {
        None
    } else {
        let api_key = args
            .openai_api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok());

        match api_key {
            Some(api_key) => {
                let provider = OpenAiProvider::with_api_key(api_key, args.model.clone());
                Some(SemanticAnalyzer::new(Arc::new(provider)))
            }
            None => {
                eprintln!(
                    "{}",
                    "No OpenAI API key provided (use --openai-api-key or set OPENAI_API_KEY); \
                     continuing with rules only"
                        .yellow()
                );
                None
            }
        }
    };

    let pipeline = AnalysisPipeline::new(engine, semantic);
    let report = pipeline.analyze(&doc.name, &doc.text).await;

    let rendered = match args.format {
        OutputFormat::Text => render::to_text(&report),
        OutputFormat::Json => render::to_json(&report)?,
        OutputFormat::Markdown => render::to_markdown(&report),
    };

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &rendered)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        if args.verbose {
            println!("Report written to {}", output_path.display());
        }
    } else {
        println!("{rendered}");
    }

    // A storage failure never takes down a computed report.
    if let Some(store_dir) = &args.store_dir {
        let store = ReportStore::new(store_dir);
        match store.save(&report) {
            Ok(path) => {
                if args.verbose {
                    println!("Report stored at {}", path.display());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist report");
                eprintln!("{}", format!("Warning: report not persisted: {e}").yellow());
            }
        }
    }

    if args.verbose {
        println!(
            "\n{} {} flags, overall risk {} ({})",
            "Done:".green().bold(),
            report.total_flags,
            report.overall_risk_score,
            report.risk_level()
        );
    }

    Ok(())
}
