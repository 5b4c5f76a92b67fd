mod common;

use auto_sales_dashboard::aggregator::compute;
use auto_sales_dashboard::output::{read_report, render_text_summary, validate_path, write_report};
use auto_sales_dashboard::report::{Report, ReportSelection, ReportType};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_report() -> Report {
    let selection = ReportSelection::yearly(1981);
    Report::new(selection, compute(&common::sample_dataset(), &selection))
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.selection, report.selection);
    assert_eq!(loaded.generated_at, report.generated_at);
    for (read_back, written) in loaded.charts.iter().zip(&report.charts) {
        assert_eq!(read_back.title, written.title);
        assert_eq!(read_back.table.keys(), written.table.keys());
        for (a, b) in read_back.table.rows.iter().zip(&written.table.rows) {
            assert!((a.value - b.value).abs() < 1e-9);
        }
    }
    assert_eq!(loaded.selection.report_type, ReportType::YearlyStatistics);
    assert_eq!(loaded.charts.len(), 4);
}

#[test]
fn test_report_json_layout() {
    let report = create_test_report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["dashboard_title"], "Automobile Sales Statistics Dashboard");
    assert_eq!(json["selection"]["report_type"], "yearly_statistics");
    assert_eq!(json["selection"]["year"], 1981);
    assert_eq!(json["charts"][0]["kind"], "line");
    assert_eq!(json["charts"][0]["x_field"], "Year");
    assert_eq!(json["charts"][0]["y_field"], "Automobile_Sales");
    assert_eq!(json["charts"][0]["table"]["reduction"], "mean");
    assert_eq!(json["charts"][3]["kind"], "pie");
}

#[test]
fn test_empty_report_round_trip() {
    let report = Report::new(ReportSelection::default(), Vec::new());
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("empty.json");

    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert!(loaded.is_empty());
    assert_eq!(loaded.selection.year, None);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_read_report_rejects_garbage() {
    let file = common::write_csv("not json");
    assert!(read_report(file.path()).is_err());
}

#[test]
fn test_text_summary_lists_every_chart() {
    let report = create_test_report();
    let text = render_text_summary(&report.charts);

    for chart in &report.charts {
        assert!(text.contains(&chart.title), "missing {}", chart.title);
    }
    assert!(text.contains("Executivecar"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_report_surfaces_write_errors() {
    let report = Report::new(ReportSelection::default(), Vec::new());
    assert!(write_report(&report, "/dev/full").is_err());
}
