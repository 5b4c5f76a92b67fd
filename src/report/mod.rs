//! Report selection, chart specifications and the report file schema.

pub mod chart;
pub mod schema;
pub mod selection;

// Re-export main types
pub use chart::{
    compare_keys, AggregateRow, AggregateTable, ChartKind, ChartSpec, GroupField, KeyValue,
    MetricField, Reduction,
};
pub use schema::Report;
pub use selection::{
    is_selectable_year, parse_year_label, year_options, year_selector_enabled, ReportSelection,
    ReportType, RECESSION_STATISTICS_LABEL, YEARLY_STATISTICS_LABEL,
};
