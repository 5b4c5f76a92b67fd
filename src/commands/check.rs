//! Check command: load a dataset and describe it.

use crate::dataset::{load_dataset, DataSource};
use anyhow::{Context, Result};

/// Load, validate and summarize a dataset
///
/// **Public** - called from main.rs
pub fn execute_check(source: &DataSource) -> Result<()> {
    println!("Checking dataset: {}", source);

    let dataset = load_dataset(source)
        .with_context(|| format!("Failed to load dataset from {}", source))?;

    let years = dataset.years();
    let recession_rows = dataset.recession_records().len();

    println!("✓ Valid sales dataset");
    println!("  Rows: {}", dataset.len());
    match (years.first(), years.last()) {
        (Some(first), Some(last)) => println!("  Years: {}-{} ({} distinct)", first, last, years.len()),
        _ => println!("  Years: none"),
    }
    println!("  Vehicle Types: {}", dataset.vehicle_types().join(", "));
    println!("  Recession Rows: {}", recession_rows);

    Ok(())
}
