//! Chart specifications handed to the rendering layer.
//!
//! A `ChartSpec` says what to draw (kind, axes, labels) and carries the
//! `AggregateTable` to draw it from. Nothing here knows how to render.

use crate::dataset::SalesRecord;
use crate::utils::config::{
    COL_ADVERTISING_EXPENDITURE, COL_AUTOMOBILE_SALES, COL_MONTH, COL_UNEMPLOYMENT_RATE,
    COL_VEHICLE_TYPE, COL_YEAR,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Column a table can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupField {
    #[serde(rename = "Year")]
    Year,
    #[serde(rename = "Month")]
    Month,
    #[serde(rename = "Vehicle_Type")]
    VehicleType,
    #[serde(rename = "unemployment_rate")]
    UnemploymentRate,
}

impl GroupField {
    /// CSV column name
    pub fn column(&self) -> &'static str {
        match self {
            GroupField::Year => COL_YEAR,
            GroupField::Month => COL_MONTH,
            GroupField::VehicleType => COL_VEHICLE_TYPE,
            GroupField::UnemploymentRate => COL_UNEMPLOYMENT_RATE,
        }
    }

    pub fn key_of(&self, record: &SalesRecord) -> KeyValue {
        match self {
            GroupField::Year => KeyValue::Int(i64::from(record.year)),
            GroupField::Month => KeyValue::Text(record.month.clone()),
            GroupField::VehicleType => KeyValue::Text(record.vehicle_type.clone()),
            GroupField::UnemploymentRate => {
                // -0.0 and 0.0 are one group
                let rate = record.unemployment_rate;
                KeyValue::Float(if rate == 0.0 { 0.0 } else { rate })
            }
        }
    }
}

/// Numeric column a table reduces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricField {
    #[serde(rename = "Automobile_Sales")]
    AutomobileSales,
    #[serde(rename = "Advertising_Expenditure")]
    AdvertisingExpenditure,
}

impl MetricField {
    pub fn column(&self) -> &'static str {
        match self {
            MetricField::AutomobileSales => COL_AUTOMOBILE_SALES,
            MetricField::AdvertisingExpenditure => COL_ADVERTISING_EXPENDITURE,
        }
    }

    pub fn value_of(&self, record: &SalesRecord) -> f64 {
        match self {
            MetricField::AutomobileSales => record.automobile_sales,
            MetricField::AdvertisingExpenditure => record.advertising_expenditure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    Mean,
    Sum,
}

/// One component of a group key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl KeyValue {
    /// Natural ordering: numbers numerically, text lexicographically.
    ///
    /// Mixed kinds never occur within one column; they order Int < Float < Text.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyValue::Int(a), KeyValue::Int(b)) => a.cmp(b),
            (KeyValue::Float(a), KeyValue::Float(b)) => a.total_cmp(b),
            (KeyValue::Text(a), KeyValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            KeyValue::Int(_) => 0,
            KeyValue::Float(_) => 1,
            KeyValue::Text(_) => 2,
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Int(v) => write!(f, "{}", v),
            KeyValue::Float(v) => write!(f, "{}", v),
            KeyValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for KeyValue {
    fn from(value: i32) -> Self {
        KeyValue::Int(i64::from(value))
    }
}

impl From<f64> for KeyValue {
    fn from(value: f64) -> Self {
        KeyValue::Float(value)
    }
}

impl From<&str> for KeyValue {
    fn from(value: &str) -> Self {
        KeyValue::Text(value.to_string())
    }
}

/// Lexicographic comparison of composite keys
pub fn compare_keys(a: &[KeyValue], b: &[KeyValue]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let ord = x.natural_cmp(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

/// A single (group key, metric value) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub key: Vec<KeyValue>,
    pub value: f64,
}

/// Grouped and reduced table feeding one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable {
    /// Grouping columns, outermost first
    pub group_by: Vec<GroupField>,
    pub metric: MetricField,
    pub reduction: Reduction,

    /// Rows in natural key order
    pub rows: Vec<AggregateRow>,
}

impl AggregateTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the value for an exact key
    pub fn value_for(&self, key: &[KeyValue]) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| compare_keys(&row.key, key) == Ordering::Equal)
            .map(|row| row.value)
    }

    pub fn keys(&self) -> Vec<&[KeyValue]> {
        self.rows.iter().map(|row| row.key.as_slice()).collect()
    }

    /// Sum of all row values (pie charts use this for shares)
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// Everything the rendering layer needs to draw one chart
///
/// For pie charts `x_field` is the names field and `y_field` the values field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x_field: GroupField,
    pub y_field: MetricField,

    /// Axis label overrides keyed by column name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    pub table: AggregateTable,
}

impl ChartSpec {
    /// Create a chart whose axes follow the table's first grouping column and metric
    pub fn new(title: impl Into<String>, kind: ChartKind, table: AggregateTable) -> Self {
        let x_field = table
            .group_by
            .first()
            .copied()
            .unwrap_or(GroupField::Year);

        Self {
            title: title.into(),
            kind,
            x_field,
            y_field: table.metric,
            labels: BTreeMap::new(),
            table,
        }
    }

    pub fn with_label(mut self, column: &str, label: impl Into<String>) -> Self {
        self.labels.insert(column.to_string(), label.into());
        self
    }

    /// Label to show for a column (override or the raw column name)
    pub fn label_for<'a>(&'a self, column: &'a str) -> &'a str {
        self.labels.get(column).map(String::as_str).unwrap_or(column)
    }
}
