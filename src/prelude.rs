//! Convenience re-exports for fixture declarations and engine setup.
//!
//! ```
//! use sqlseed::prelude::*;
//! ```

pub use crate::config::{CleanupPhase, CleanupStrategy, SeedConfig};
pub use crate::dataset::csv::{CsvDataSet, CsvTable, DEFAULT_NULL_VALUE};
pub use crate::dataset::format::FixtureFormat;
pub use crate::dataset::parser::DatasetParser;
pub use crate::dataset::{Column, Dataset, Row, Table};
pub use crate::engine::SeedEngine;
pub use crate::error::{SeedError, SeedResult};
pub use crate::scope::resolve_dataset;
pub use crate::statement::{Statement, delete_statements, insert_statements};
