//! Aggregation of the sales dataset into chart tables.
//!
//! This module transforms the loaded dataset into:
//! - Grouped mean/sum tables (the `group_by` primitive)
//! - The four chart specifications for a report selection

pub mod engine;
pub mod group;

// Re-export main functions
pub use engine::compute;
pub use group::group_by;
