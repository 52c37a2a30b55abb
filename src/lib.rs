//! Declarative database-fixture lifecycle engine for integration tests.
//!
//! Given a description of tables and rows (structured builders, a CSV-like
//! shorthand, or a fixture file), the engine inserts known data before a
//! test unit runs and removes it afterward, so tests observe a
//! deterministic database state without hand-written setup/teardown SQL.
//!
//! # Overview
//!
//! - **[`Dataset`] model**: ordered tables of rows; declared order is the
//!   insertion order (parents first) and reverses for deletion, so
//!   foreign-key constraints hold without disabling them.
//! - **Scopes**: a dataset attached at suite scope applies to every unit;
//!   a unit-scope dataset overrides it in its entirety.
//! - **[`SeedConfig`]**: when cleanup runs ([`CleanupPhase`]), how rows are
//!   selected ([`CleanupStrategy`]), and raw set-up/tear-down queries run
//!   around each unit.
//! - **[`SeedEngine`]**: the lifecycle orchestrator, driven by the host
//!   test-runner through `on_suite_start` / `on_unit_start` /
//!   `on_unit_end` / `on_suite_end`.
//!
//! # Quick Start
//!
//! ```ignore
//! use sqlseed::prelude::*;
//!
//! let pool = sqlx::any::AnyPoolOptions::new()
//! 	.connect("sqlite::memory:")
//! 	.await?;
//!
//! let engine = SeedEngine::new(pool, SeedConfig::new())
//! 	.with_suite_dataset(
//! 		Dataset::new()
//! 			.with_table(Table::new("parent").with_row(Row::new(vec![
//! 				Column::id("id", "2"),
//! 				Column::new("name", "class-parent"),
//! 			])))
//! 			.with_table(Table::new("child").with_row(Row::new(vec![
//! 				Column::id("id", "2"),
//! 				Column::new("name", "class-child"),
//! 				Column::new("parent_id", "2"),
//! 			]))),
//! 	);
//!
//! engine.on_suite_start().await;
//! engine.on_unit_start(None).await?;
//! // ... the test body observes parent/child rows with id 2 ...
//! engine.on_unit_end().await?;
//! engine.on_suite_end().await?;
//! ```
//!
//! The same data as CSV shorthand:
//!
//! ```
//! use sqlseed::prelude::*;
//!
//! let dataset = CsvDataSet::new()
//! 	.with_table(CsvTable::new(
//! 		"parent",
//! 		vec!["id, name", "2, class-parent"],
//! 		vec!["id"],
//! 	))
//! 	.with_table(CsvTable::new(
//! 		"child",
//! 		vec!["id, name, parent_id", "2, class-child, 2"],
//! 		vec!["id"],
//! 	))
//! 	.normalize()
//! 	.unwrap();
//! assert_eq!(dataset.tables.len(), 2);
//! ```
//!
//! # Features
//!
//! - `yaml`: YAML fixture-file support (JSON is always available)
//!
//! # Scope
//!
//! The engine does not manage schema migrations, validate column types,
//! offer a query/assertion API, or pool connections. It is handed an open
//! [`sqlx::AnyPool`] owned by the caller and issues fire-and-forget
//! parameterized DML through it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod executor;
pub mod prelude;
pub mod scope;
pub mod statement;

pub use config::{CleanupPhase, CleanupStrategy, SeedConfig};
pub use dataset::csv::{CsvDataSet, CsvTable};
pub use dataset::{Column, Dataset, Row, Table};
pub use engine::SeedEngine;
pub use error::{SeedError, SeedResult};
