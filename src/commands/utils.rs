use anyhow::Result;
use std::path::PathBuf;
use crate::output::read_report;
use crate::utils::config::{REPORT_SCHEMA_VERSION, REQUIRED_COLUMNS};

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!(
        "  Report: {}",
        report.selection.report_type.label().unwrap_or("(none)")
    );
    if let Some(year) = report.selection.effective_year() {
        println!("  Year: {}", year);
    }
    println!("  Charts: {}", report.charts.len());
    for chart in &report.charts {
        println!("    - {} ({}, {} rows)", chart.title, chart.kind, chart.table.len());
    }
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Automobile Sales Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!("Required CSV columns: {}", REQUIRED_COLUMNS.join(", "));
    println!();

    if show_details {
        println!("Report Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  dashboard_title: string  - Dashboard heading");
        println!("  selection: object        - Selector values");
        println!("    report_type: string    - yearly_statistics | recession_statistics | none");
        println!("    year: number?          - Selected year (yearly statistics only)");
        println!("  charts: array            - Zero or four chart specifications");
        println!("    title: string          - Chart title");
        println!("    kind: string           - line | bar | pie");
        println!("    x_field: string        - Grouping column (names for pie)");
        println!("    y_field: string        - Metric column (values for pie)");
        println!("    labels: object?        - Axis label overrides");
        println!("    table: object          - Aggregated data");
        println!("      group_by: array      - Grouping columns");
        println!("      metric: string       - Reduced column");
        println!("      reduction: string    - mean | sum");
        println!("      rows: array          - {{ key: array, value: number }}");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Auto Sales Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Recession and yearly statistics over historical automobile sales.");
}
