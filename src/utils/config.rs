//! Configuration and constants for the CLI.

use std::time::Duration;

/// Public course dataset the dashboard was built around
pub const DEFAULT_DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/historical_automobile_sales.csv";

/// Default timeout when downloading the dataset
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Heading shown above the four charts
pub const DASHBOARD_TITLE: &str = "Automobile Sales Statistics Dashboard";

// Selectable years (inclusive on both ends)
pub const YEAR_MIN: i32 = 1980;
pub const YEAR_MAX: i32 = 2023;

// Column names the CSV header must carry. Extra columns are ignored.
pub const COL_YEAR: &str = "Year";
pub const COL_MONTH: &str = "Month";
pub const COL_VEHICLE_TYPE: &str = "Vehicle_Type";
pub const COL_AUTOMOBILE_SALES: &str = "Automobile_Sales";
pub const COL_ADVERTISING_EXPENDITURE: &str = "Advertising_Expenditure";
pub const COL_UNEMPLOYMENT_RATE: &str = "unemployment_rate";
pub const COL_RECESSION: &str = "Recession";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_YEAR,
    COL_MONTH,
    COL_VEHICLE_TYPE,
    COL_AUTOMOBILE_SALES,
    COL_ADVERTISING_EXPENDITURE,
    COL_UNEMPLOYMENT_RATE,
    COL_RECESSION,
];
