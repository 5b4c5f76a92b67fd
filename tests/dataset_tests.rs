mod common;

use auto_sales_dashboard::dataset::{check_headers, load_dataset, DataSource};
use auto_sales_dashboard::utils::error::DatasetError;

#[test]
fn test_load_dataset_from_file() {
    let file = common::write_csv(&common::sample_csv());
    let source = DataSource::parse(file.path().to_str().unwrap());

    assert!(!source.is_url());

    let dataset = load_dataset(&source).unwrap();
    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.years(), vec![1980, 1981, 2020]);
    assert_eq!(dataset.recession_records().len(), 5);
}

#[test]
fn test_load_dataset_missing_columns_message() {
    let file = common::write_csv("Year,Month\n1980,Jan\n");
    let err = load_dataset(&DataSource::parse(file.path().to_str().unwrap())).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Missing required column"));
    assert!(msg.contains("Vehicle_Type"));
    assert!(msg.contains("Recession"));
}

#[test]
fn test_load_dataset_invalid_row_reports_line() {
    let csv = format!("{}\n1980,Jan,Car,100,1000,6.0,1\n1980,Feb,Car,,1000,6.0,1\n", common::HEADER);
    let file = common::write_csv(&csv);

    let err = load_dataset(&DataSource::parse(file.path().to_str().unwrap())).unwrap_err();
    match err {
        DatasetError::InvalidRecord { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_load_dataset_empty_file() {
    let file = common::write_csv("");
    let err = load_dataset(&DataSource::parse(file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumns(cols) if cols.len() == 7));
}

#[test]
fn test_check_headers_any_order() {
    let headers = csv::StringRecord::from(vec![
        "Recession",
        "unemployment_rate",
        "Advertising_Expenditure",
        "Automobile_Sales",
        "Vehicle_Type",
        "Month",
        "Year",
        "City",
    ]);
    assert!(check_headers(&headers).is_ok());
}

#[test]
fn test_data_source_display() {
    let url = "https://example.com/historical_automobile_sales.csv";
    let source = DataSource::parse(url);

    assert!(source.is_url());
    assert_eq!(source.to_string(), url);
}
