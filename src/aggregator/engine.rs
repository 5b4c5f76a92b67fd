//! Turn a selection into the four chart specifications.
//!
//! Recession reports work on the recession-only slice. Yearly reports chart
//! the whole dataset for the first two charts and the selected year for the
//! last two.

use super::group::group_by;
use crate::dataset::Dataset;
use crate::report::chart::{ChartKind, ChartSpec, GroupField, MetricField, Reduction};
use crate::report::selection::{is_selectable_year, ReportSelection, ReportType};
use crate::utils::config::{COL_AUTOMOBILE_SALES, COL_UNEMPLOYMENT_RATE};
use log::{debug, warn};

/// Compute the charts for a selection
///
/// **Public** - main entry point of the engine
///
/// Pure: the dataset is only borrowed, and the same inputs always give the
/// same charts. Incomplete selections (no report type, or yearly statistics
/// without a year) give an empty list.
pub fn compute(dataset: &Dataset, selection: &ReportSelection) -> Vec<ChartSpec> {
    match (selection.report_type, selection.year) {
        (ReportType::RecessionStatistics, _) => recession_charts(dataset),
        (ReportType::YearlyStatistics, Some(year)) => yearly_charts(dataset, year),
        _ => {
            debug!("Incomplete selection {:?}, nothing to display", selection);
            Vec::new()
        }
    }
}

/// Charts for "Recession Period Statistics"
///
/// **Private** - internal branch of compute
fn recession_charts(dataset: &Dataset) -> Vec<ChartSpec> {
    let recession = dataset.recession_records();
    debug!("Recession slice: {} of {} rows", recession.len(), dataset.len());

    let yearly = group_by(
        recession.iter().copied(),
        &[GroupField::Year],
        MetricField::AutomobileSales,
        Reduction::Mean,
    );

    let by_type = group_by(
        recession.iter().copied(),
        &[GroupField::VehicleType],
        MetricField::AutomobileSales,
        Reduction::Mean,
    );

    let ad_share = group_by(
        recession.iter().copied(),
        &[GroupField::VehicleType],
        MetricField::AdvertisingExpenditure,
        Reduction::Sum,
    );

    let unemployment = group_by(
        recession.iter().copied(),
        &[GroupField::UnemploymentRate, GroupField::VehicleType],
        MetricField::AutomobileSales,
        Reduction::Sum,
    );

    vec![
        ChartSpec::new(
            "Average Automobile Sales Fluctuation Over Recession Period",
            ChartKind::Line,
            yearly,
        ),
        ChartSpec::new("Average Vehicles Sold by Type", ChartKind::Bar, by_type),
        ChartSpec::new(
            "Advertising Expenditure Share by Vehicle Type",
            ChartKind::Pie,
            ad_share,
        ),
        ChartSpec::new(
            "Effect of Unemployment Rate on Vehicle Type and Sales",
            ChartKind::Bar,
            unemployment,
        )
        .with_label(COL_UNEMPLOYMENT_RATE, "Unemployment Rate")
        .with_label(COL_AUTOMOBILE_SALES, "Automobile Sales"),
    ]
}

/// Charts for "Yearly Statistics"
///
/// **Private** - internal branch of compute
fn yearly_charts(dataset: &Dataset, year: i32) -> Vec<ChartSpec> {
    if !is_selectable_year(year) {
        warn!("Year {} is outside the selectable range; yearly charts will be empty", year);
    }

    let year_rows = dataset.records_for_year(year);
    debug!("Year {} slice: {} of {} rows", year, year_rows.len(), dataset.len());

    let yearly = group_by(
        dataset.records(),
        &[GroupField::Year],
        MetricField::AutomobileSales,
        Reduction::Mean,
    );

    let monthly = group_by(
        dataset.records(),
        &[GroupField::Month],
        MetricField::AutomobileSales,
        Reduction::Sum,
    );

    let by_type = group_by(
        year_rows.iter().copied(),
        &[GroupField::VehicleType],
        MetricField::AutomobileSales,
        Reduction::Mean,
    );

    let ad_share = group_by(
        year_rows.iter().copied(),
        &[GroupField::VehicleType],
        MetricField::AdvertisingExpenditure,
        Reduction::Sum,
    );

    vec![
        ChartSpec::new("Yearly Average Automobile Sales", ChartKind::Line, yearly),
        ChartSpec::new("Total Monthly Automobile Sales", ChartKind::Line, monthly),
        ChartSpec::new(
            format!("Average Vehicles Sold by Type in {}", year),
            ChartKind::Bar,
            by_type,
        ),
        ChartSpec::new(
            "Advertisement Expenditure Share by Vehicle Type",
            ChartKind::Pie,
            ad_share,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SalesRecord;
    use crate::report::chart::KeyValue;

    fn two_row_dataset() -> Dataset {
        let row = |sales: f64, recession: bool| SalesRecord {
            year: 2020,
            month: "Jan".to_string(),
            vehicle_type: "Car".to_string(),
            automobile_sales: sales,
            advertising_expenditure: 500.0,
            unemployment_rate: 6.0,
            recession,
        };
        Dataset::new(vec![row(100.0, false), row(50.0, true)])
    }

    #[test]
    fn test_recession_uses_only_recession_rows() {
        let charts = compute(&two_row_dataset(), &ReportSelection::recession());

        assert_eq!(charts.len(), 4);
        assert_eq!(charts[0].table.rows.len(), 1);
        assert_eq!(charts[0].table.rows[0].key, vec![KeyValue::from(2020)]);
        assert_eq!(charts[0].table.rows[0].value, 50.0);
    }

    #[test]
    fn test_yearly_first_chart_ignores_recession_flag() {
        let charts = compute(&two_row_dataset(), &ReportSelection::yearly(2020));

        assert_eq!(charts.len(), 4);
        assert_eq!(charts[0].table.rows[0].value, 75.0);
        assert_eq!(charts[2].title, "Average Vehicles Sold by Type in 2020");
    }

    #[test]
    fn test_incomplete_selections_are_empty() {
        let dataset = two_row_dataset();
        assert!(compute(&dataset, &ReportSelection::default()).is_empty());
        assert!(compute(&dataset, &ReportSelection::new(ReportType::YearlyStatistics, None)).is_empty());
        assert!(compute(&dataset, &ReportSelection::new(ReportType::None, Some(2020))).is_empty());
    }

    #[test]
    fn test_unemployment_chart_labels() {
        let charts = compute(&two_row_dataset(), &ReportSelection::recession());
        let chart = &charts[3];

        assert_eq!(chart.x_field, GroupField::UnemploymentRate);
        assert_eq!(chart.y_field, MetricField::AutomobileSales);
        assert_eq!(chart.label_for("unemployment_rate"), "Unemployment Rate");
        assert_eq!(chart.label_for("Automobile_Sales"), "Automobile Sales");
    }
}
