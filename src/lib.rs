//! Auto Sales Dashboard
//!
//! Recession-period and yearly statistics over a historical automobile
//! sales dataset. The library loads the CSV into a typed, read-only
//! [`dataset::Dataset`] and turns a [`report::ReportSelection`] into four
//! chart specifications with [`aggregator::compute`]. Drawing the charts is
//! left to whatever consumes the JSON report.
//!
//! ```ignore
//! use auto_sales_dashboard::aggregator::compute;
//! use auto_sales_dashboard::dataset::{load_dataset, DataSource};
//! use auto_sales_dashboard::report::ReportSelection;
//!
//! let dataset = load_dataset(&DataSource::parse("historical_automobile_sales.csv"))?;
//! let charts = compute(&dataset, &ReportSelection::yearly(2008));
//! ```

pub mod aggregator;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod report;
pub mod utils;
