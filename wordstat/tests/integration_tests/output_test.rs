// tests/integration_tests/output_test.rs
use super::common::SAMPLE_TEXT;
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use wordstat::{ChartOptions, ReportFormat, TextStats, analyze, render_chart, save_results};

#[test]
fn test_report_and_chart_share_one_table() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (stats, word_count) = analyze(SAMPLE_TEXT);

    let report = save_results(
        &stats,
        &temp_dir.path().join("analyzer_result.json"),
        ReportFormat::Json,
    )?;
    let saved: TextStats = serde_json::from_str(&fs::read_to_string(report)?)?;
    assert_eq!(saved, stats);

    let chart_path = temp_dir.path().join("word_frequencies.svg");
    let options = ChartOptions {
        top_n: 11,
        ..ChartOptions::default()
    };
    render_chart(&word_count, &chart_path, &options)?;

    let svg = fs::read_to_string(chart_path)?;
    assert_eq!(
        svg.matches("class=\"bar\"").count(),
        11,
        "Chart draws from the full table, not the 10-word report"
    );
    assert!(svg.contains("<title>a: 2</title>"));
    Ok(())
}
