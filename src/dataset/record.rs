//! Typed row schema for the historical automobile sales CSV.
//!
//! Every column the reports touch is typed up front so a bad file fails at
//! load time rather than halfway through an aggregation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the sales dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Year")]
    pub year: i32,

    /// Abbreviated month name ("Jan".."Dec")
    #[serde(rename = "Month")]
    pub month: String,

    #[serde(rename = "Vehicle_Type")]
    pub vehicle_type: String,

    /// Units sold
    #[serde(rename = "Automobile_Sales")]
    pub automobile_sales: f64,

    #[serde(rename = "Advertising_Expenditure")]
    pub advertising_expenditure: f64,

    /// Percent
    #[serde(rename = "unemployment_rate")]
    pub unemployment_rate: f64,

    /// Stored as 0/1 in the CSV
    #[serde(rename = "Recession", with = "recession_flag")]
    pub recession: bool,
}

impl SalesRecord {
    /// Check values the deserializer cannot rule out on its own
    ///
    /// **Public** - called by the loader for every row
    pub fn validate(&self) -> Result<(), String> {
        let numeric = [
            ("Automobile_Sales", self.automobile_sales),
            ("Advertising_Expenditure", self.advertising_expenditure),
            ("unemployment_rate", self.unemployment_rate),
        ];

        for (column, value) in numeric {
            if !value.is_finite() {
                return Err(format!("{} is not a finite number ({})", column, value));
            }
        }

        if self.month.is_empty() {
            return Err("Month is empty".to_string());
        }

        if self.vehicle_type.is_empty() {
            return Err("Vehicle_Type is empty".to_string());
        }

        Ok(())
    }
}

/// Immutable, in-memory sales table
///
/// Loaded once and then only ever borrowed; every report is computed from a
/// shared reference to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows flagged as recession periods
    pub fn recession_records(&self) -> Vec<&SalesRecord> {
        self.records.iter().filter(|r| r.recession).collect()
    }

    /// Rows belonging to a single year
    pub fn records_for_year(&self, year: i32) -> Vec<&SalesRecord> {
        self.records.iter().filter(|r| r.year == year).collect()
    }

    /// Distinct years, ascending
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        years.into_iter().collect()
    }

    /// Distinct vehicle types, sorted
    pub fn vehicle_types(&self) -> Vec<String> {
        let types: BTreeSet<&str> = self.records.iter().map(|r| r.vehicle_type.as_str()).collect();
        types.into_iter().map(str::to_string).collect()
    }
}

impl From<Vec<SalesRecord>> for Dataset {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::new(records)
    }
}

/// (De)serialize the Recession column as a 0/1 flag
mod recession_flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_flag(raw.trim()).ok_or_else(|| {
            de::Error::custom(format!("Recession must be 0 or 1, got {:?}", raw))
        })
    }

    // Some exports write the flag as a float ("1.0")
    fn parse_flag(raw: &str) -> Option<bool> {
        match raw {
            "0" => Some(false),
            "1" => Some(true),
            other => match other.parse::<f64>().ok()? {
                v if v == 0.0 => Some(false),
                v if v == 1.0 => Some(true),
                _ => None,
            },
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, vehicle_type: &str, recession: bool) -> SalesRecord {
        SalesRecord {
            year,
            month: "Jan".to_string(),
            vehicle_type: vehicle_type.to_string(),
            automobile_sales: 100.0,
            advertising_expenditure: 500.0,
            unemployment_rate: 6.0,
            recession,
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut r = record(2020, "Car", false);
        assert!(r.validate().is_ok());

        r.automobile_sales = f64::NAN;
        let err = r.validate().unwrap_err();
        assert!(err.contains("Automobile_Sales"));
    }

    #[test]
    fn test_validate_rejects_empty_vehicle_type() {
        let r = record(2020, "", false);
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_dataset_slices() {
        let dataset = Dataset::new(vec![
            record(1981, "Sports", true),
            record(1980, "Car", false),
            record(1981, "Car", false),
        ]);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.recession_records().len(), 1);
        assert_eq!(dataset.records_for_year(1981).len(), 2);
        assert!(dataset.records_for_year(1999).is_empty());
        assert_eq!(dataset.years(), vec![1980, 1981]);
        assert_eq!(dataset.vehicle_types(), vec!["Car", "Sports"]);
    }
}
