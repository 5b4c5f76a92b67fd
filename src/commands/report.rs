//! Report command implementation.
//!
//! The report command:
//! 1. Loads the sales dataset
//! 2. Computes the charts for the selection
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use super::models::ReportArgs;
use crate::aggregator::compute;
use crate::dataset::{is_url, load_dataset, DataSource};
use crate::output::{render_text_summary, validate_path, write_report};
use crate::report::{is_selectable_year, Report, ReportType};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset download or parse failures
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Report selection: {:?}", args.selection);

    // Step 1: Load dataset
    info!("Step 1/3: Loading dataset...");
    let dataset = load_dataset(&args.data_source)
        .with_context(|| format!("Failed to load dataset from {}", args.data_source))?;

    // Step 2: Compute charts
    info!("Step 2/3: Computing charts...");
    let charts = compute(&dataset, &args.selection);

    if !args.selection.is_complete() {
        info!("Selection is incomplete; nothing to display");
    }

    for chart in &charts {
        debug!("  {} ({}, {} rows)", chart.title, chart.kind, chart.table.len());
    }

    // Step 3: Write outputs
    info!("Step 3/3: Writing report...");
    let report = Report::new(args.selection, charts);

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("{}", report.dashboard_title.to_uppercase());
        println!("{}", "=".repeat(60));
        match args.selection.report_type.label() {
            Some(label) => println!("Report: {}", label),
            None => println!("Report: (none selected)"),
        }
        if let Some(year) = args.selection.effective_year() {
            println!("Year:   {}", year);
        }
        println!("Rows:   {}", dataset.len());
        println!("\n{}", render_text_summary(&report.charts));
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
///
/// Selector values are never rejected: incomplete selections produce an
/// empty report and out-of-range years produce empty year charts.
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    match &args.data_source {
        DataSource::Url(url) => {
            if !is_url(url) {
                anyhow::bail!("Data URL must start with http:// or https://");
            }
        }
        DataSource::Path(path) => {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Data path cannot be empty");
            }
            if !path.exists() {
                anyhow::bail!("Data file does not exist: {}", path.display());
            }
            if path.is_dir() {
                anyhow::bail!("Data path is a directory: {}", path.display());
            }
        }
    }

    validate_path(&args.output_json).context("Invalid output path")?;

    if args.selection.report_type == ReportType::YearlyStatistics {
        match args.selection.year {
            None => warn!("Yearly statistics need a year; the report will be empty"),
            Some(year) if !is_selectable_year(year) => {
                warn!("Year {} is outside 1980-2023; year charts will be empty", year)
            }
            Some(_) => {}
        }
    }

    Ok(())
}
