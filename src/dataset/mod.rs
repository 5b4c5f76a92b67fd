//! Sales dataset schema and loading.
//!
//! This module handles:
//! - The typed `SalesRecord` row schema
//! - The read-only `Dataset` handle shared by every report
//! - Loading CSV data from a file or URL with header validation

pub mod loader;
pub mod record;

// Re-export main types
pub use loader::{check_headers, is_url, load_dataset, read_csv, DataSource};
pub use record::{Dataset, SalesRecord};
