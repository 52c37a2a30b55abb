//! Scope resolution between suite-level and unit-level datasets.

use crate::dataset::Dataset;

/// Chooses the effective dataset for one test unit.
///
/// A unit-level dataset, when present, is effective **in its entirety**; it
/// is never merged table-by-table with the suite-level dataset. Without a
/// unit-level dataset the suite-level one applies; with neither, the
/// effective dataset is empty and the engine inserts and cleans no rows
/// (set-up and tear-down queries still run).
pub fn resolve_dataset(suite: Option<&Dataset>, unit: Option<&Dataset>) -> Dataset {
	unit.or(suite).cloned().unwrap_or_default()
}
