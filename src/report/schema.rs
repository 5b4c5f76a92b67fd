//! Output JSON schema for report files.
//!
//! Schema is versioned to allow future evolution.

use super::chart::ChartSpec;
use super::selection::ReportSelection;
use crate::utils::config::{DASHBOARD_TITLE, REPORT_SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    pub dashboard_title: String,

    /// Selector values the charts were computed for
    pub selection: ReportSelection,

    /// Zero charts for an incomplete selection, four otherwise
    pub charts: Vec<ChartSpec>,

    /// RFC 3339 timestamp
    pub generated_at: String,
}

impl Report {
    /// Wrap computed charts with metadata, stamped with the current time
    pub fn new(selection: ReportSelection, charts: Vec<ChartSpec>) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            dashboard_title: DASHBOARD_TITLE.to_string(),
            selection,
            charts,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
