//! Selector values that drive which report branch runs.
//!
//! Selector parsing is total: anything that is not a recognised report type
//! or year simply maps to "nothing selected" and produces no charts.

use crate::utils::config::{YEAR_MAX, YEAR_MIN};
use log::warn;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const YEARLY_STATISTICS_LABEL: &str = "Yearly Statistics";
pub const RECESSION_STATISTICS_LABEL: &str = "Recession Period Statistics";

/// Report type chosen in the statistics drop-down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    YearlyStatistics,
    RecessionStatistics,
    #[default]
    None,
}

impl ReportType {
    /// Map a drop-down label to a report type
    ///
    /// Accepts the two display labels and the short forms `yearly` /
    /// `recession`, ignoring case. Placeholders such as "Select Statistics"
    /// map to `ReportType::None`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "yearly statistics" | "yearly" => ReportType::YearlyStatistics,
            "recession period statistics" | "recession" => ReportType::RecessionStatistics,
            _ => ReportType::None,
        }
    }

    /// Display label, `None` for the empty selection
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ReportType::YearlyStatistics => Some(YEARLY_STATISTICS_LABEL),
            ReportType::RecessionStatistics => Some(RECESSION_STATISTICS_LABEL),
            ReportType::None => None,
        }
    }
}

/// The pair of selector values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSelection {
    pub report_type: ReportType,

    /// Only meaningful for yearly statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl ReportSelection {
    pub fn new(report_type: ReportType, year: Option<i32>) -> Self {
        Self { report_type, year }
    }

    pub fn yearly(year: i32) -> Self {
        Self::new(ReportType::YearlyStatistics, Some(year))
    }

    pub fn recession() -> Self {
        Self::new(ReportType::RecessionStatistics, None)
    }

    /// Build a selection straight from the two raw selector strings
    ///
    /// The year is dropped unless the year selector is enabled for the
    /// chosen report type.
    pub fn from_labels(report_label: &str, year_label: Option<&str>) -> Self {
        let report_type = ReportType::from_label(report_label);
        let year = year_label.and_then(parse_year_label);

        if year.is_some() && !year_selector_enabled(report_type) {
            warn!("Ignoring year {:?}: only yearly statistics take a year", year_label);
            return Self::new(report_type, None);
        }

        Self::new(report_type, year)
    }

    /// Year that actually filters data, if any
    pub fn effective_year(&self) -> Option<i32> {
        match self.report_type {
            ReportType::YearlyStatistics => self.year,
            _ => None,
        }
    }

    /// Whether this selection produces any charts at all
    pub fn is_complete(&self) -> bool {
        match self.report_type {
            ReportType::RecessionStatistics => true,
            ReportType::YearlyStatistics => self.year.is_some(),
            ReportType::None => false,
        }
    }
}

/// Parse the year selector value
///
/// Returns `None` for the placeholder ("Select-year") or any non-integer
/// text. Out-of-range years are kept: they just match no rows.
pub fn parse_year_label(label: &str) -> Option<i32> {
    label.trim().parse::<i32>().ok()
}

/// Years offered by the year selector
pub fn year_options() -> RangeInclusive<i32> {
    YEAR_MIN..=YEAR_MAX
}

pub fn is_selectable_year(year: i32) -> bool {
    year_options().contains(&year)
}

/// The year selector is only active for yearly statistics
pub fn year_selector_enabled(report_type: ReportType) -> bool {
    report_type == ReportType::YearlyStatistics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_from_label() {
        assert_eq!(ReportType::from_label("Yearly Statistics"), ReportType::YearlyStatistics);
        assert_eq!(
            ReportType::from_label("Recession Period Statistics"),
            ReportType::RecessionStatistics
        );
        assert_eq!(ReportType::from_label(" recession "), ReportType::RecessionStatistics);
        assert_eq!(ReportType::from_label("YEARLY"), ReportType::YearlyStatistics);
        assert_eq!(ReportType::from_label("Select Statistics"), ReportType::None);
        assert_eq!(ReportType::from_label(""), ReportType::None);
    }

    #[test]
    fn test_parse_year_label() {
        assert_eq!(parse_year_label("1999"), Some(1999));
        assert_eq!(parse_year_label(" 2023 "), Some(2023));
        assert_eq!(parse_year_label("Select-year"), None);
        assert_eq!(parse_year_label(""), None);
        // Out of range still parses
        assert_eq!(parse_year_label("1950"), Some(1950));
    }

    #[test]
    fn test_effective_year_ignored_outside_yearly() {
        let s = ReportSelection::new(ReportType::RecessionStatistics, Some(1990));
        assert_eq!(s.effective_year(), None);
        assert!(s.is_complete());

        let s = ReportSelection::yearly(1990);
        assert_eq!(s.effective_year(), Some(1990));

        let s = ReportSelection::new(ReportType::YearlyStatistics, None);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_from_labels_drops_year_when_selector_disabled() {
        let s = ReportSelection::from_labels(RECESSION_STATISTICS_LABEL, Some("1990"));
        assert_eq!(s, ReportSelection::recession());

        let s = ReportSelection::from_labels("Select Statistics", Some("1990"));
        assert_eq!(s.year, None);

        let s = ReportSelection::from_labels(YEARLY_STATISTICS_LABEL, Some("1990"));
        assert_eq!(s, ReportSelection::yearly(1990));
    }

    #[test]
    fn test_year_options() {
        let years: Vec<i32> = year_options().collect();
        assert_eq!(years.len(), 44);
        assert_eq!(years.first(), Some(&1980));
        assert_eq!(years.last(), Some(&2023));
        assert!(is_selectable_year(2000));
        assert!(!is_selectable_year(2024));
    }

    #[test]
    fn test_year_selector_enabled() {
        assert!(year_selector_enabled(ReportType::YearlyStatistics));
        assert!(!year_selector_enabled(ReportType::RecessionStatistics));
        assert!(!year_selector_enabled(ReportType::None));
    }
}
