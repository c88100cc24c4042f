//! Report rendering: console text, markdown, and JSON.

use crate::core::{Report, Severity};
use anyhow::Result;

/// Number of findings surfaced in the "top concerns" section.
const TOP_CONCERNS: usize = 5;

pub fn to_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("=== CONTRACT RED FLAG ANALYSIS ===\n");
    out.push_str(&format!("Document: {}\n", report.document_name));
    out.push_str(&format!(
        "Analyzed: {}\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "Processing Time: {}s\n\n",
        report.processing_time_seconds
    ));

    out.push_str(&format!(
        "OVERALL RISK: {} ({}/10)\n\n",
        report.risk_level(),
        report.overall_risk_score
    ));

    out.push_str("FINDINGS SUMMARY:\n");
    out.push_str(&format!("- CRITICAL: {}\n", report.critical_count));
    out.push_str(&format!("- HIGH: {}\n", report.high_count));
    out.push_str(&format!("- MEDIUM: {}\n", report.medium_count));
    out.push_str(&format!("- LOW: {}\n", report.low_count));
    out.push_str(&format!("- TOTAL: {}\n", report.total_flags));

    if !report.flags.is_empty() {
        out.push_str("\nTOP CONCERNS:\n");
        for (i, flag) in report.flags.iter().take(TOP_CONCERNS).enumerate() {
            out.push_str(&format!("\n{}. [{}] {}\n", i + 1, flag.severity, flag.title));
            let summary: String = flag.description.chars().take(150).collect();
            out.push_str(&format!("   {summary}...\n"));
        }
    }

    out
}

pub fn to_markdown(report: &Report) -> String {
    let mut md = String::from("# Contract Red Flag Report\n\n");

    md.push_str(&format!("**Document**: {}\n", report.document_name));
    md.push_str(&format!(
        "**Analyzed**: {}\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "**Overall Risk**: {} ({}/10)\n\n",
        report.risk_level(),
        report.overall_risk_score
    ));

    md.push_str("## Summary\n\n");
    md.push_str(&format!("- Critical: {}\n", report.critical_count));
    md.push_str(&format!("- High: {}\n", report.high_count));
    md.push_str(&format!("- Medium: {}\n", report.medium_count));
    md.push_str(&format!("- Low: {}\n", report.low_count));
    md.push_str(&format!("- Total: {}\n\n", report.total_flags));

    if !report.flags.is_empty() {
        md.push_str("## Findings\n\n");

        for flag in &report.flags {
            md.push_str(&format!("### {} {}: {}\n\n", emoji(flag.severity), flag.severity, flag.title));
            md.push_str(&format!("**Category:** {}\n", flag.category));
            md.push_str(&format!("**Score:** {}/10\n", flag.score));
            md.push_str(&format!("**Source:** {}\n\n", flag.source));
            md.push_str(&format!("{}\n\n", flag.description));

            if !flag.location.is_empty() {
                md.push_str(&format!("> {}\n\n", flag.location));
            }
            if let Some(ref recommendation) = flag.recommendation {
                md.push_str(&format!("**Recommendation:** {recommendation}\n\n"));
            }
        }
    }

    md
}

pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn emoji(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴",
        Severity::High => "🟠",
        Severity::Medium => "🟡",
        Severity::Low => "🟢",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Aggregator;
    use crate::core::{Finding, FlagCategory, FlagSource};

    fn sample_report() -> Report {
        let flags = vec![
            Finding::new(
                FlagCategory::Financial,
                Severity::Critical,
                "Undefined Earnout Targets",
                "Payment terms are incomplete or subject to future agreement.",
            )
            .with_score(10)
            .with_location("...the earnout shall be mutually agreed...")
            .with_source(FlagSource::RuleEngine)
            .with_recommendation("Specify exact targets."),
            Finding::new(
                FlagCategory::Customer,
                Severity::High,
                "High Customer Concentration (65%)",
                "Top customers represent 65% of revenue.",
            )
            .with_score(7)
            .with_source(FlagSource::LlmAnalyzer),
        ];
        Aggregator::new().aggregate("deal.txt", flags, Vec::new(), 2.345)
    }

    #[test]
    fn test_text_output_has_summary_and_top_concerns() {
        let text = to_text(&sample_report());
        assert!(text.contains("Document: deal.txt"));
        assert!(text.contains("- CRITICAL: 1"));
        assert!(text.contains("TOP CONCERNS:"));
        assert!(text.contains("[CRITICAL] Undefined Earnout Targets"));
    }

    #[test]
    fn test_markdown_output_lists_findings() {
        let md = to_markdown(&sample_report());
        assert!(md.contains("# Contract Red Flag Report"));
        assert!(md.contains("### 🔴 CRITICAL: Undefined Earnout Targets"));
        assert!(md.contains("**Source:** llm_analyzer"));
        assert!(md.contains("**Recommendation:** Specify exact targets."));
    }

    #[test]
    fn test_json_output_round_trips() {
        let report = sample_report();
        let json = to_json(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_flags, report.total_flags);
        assert_eq!(back.overall_risk_score, report.overall_risk_score);
    }

    #[test]
    fn test_empty_report_renders_without_concerns() {
        let report = Aggregator::new().aggregate("empty.txt", Vec::new(), Vec::new(), 0.1);
        let text = to_text(&report);
        assert!(text.contains("- TOTAL: 0"));
        assert!(!text.contains("TOP CONCERNS"));
        assert!(text.contains("MINIMAL RISK"));
    }
}
