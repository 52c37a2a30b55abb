//! SQL statement generation from the dataset model.
//!
//! Insert statements walk the dataset in declared order (parent tables
//! first); delete statements walk it in reverse, so dependent rows leave
//! the database before the rows they reference.

use crate::config::CleanupStrategy;
use crate::dataset::{Dataset, Row, Table};
use crate::error::{SeedError, SeedResult};

/// One parameterized DML statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
	/// SQL text with positional `?` placeholders.
	pub sql: String,
	/// Parameters bound in order; `None` binds SQL NULL.
	pub params: Vec<Option<String>>,
}

impl Statement {
	pub(crate) fn new(sql: impl Into<String>, params: Vec<Option<String>>) -> Self {
		Self {
			sql: sql.into(),
			params,
		}
	}
}

/// Builds one INSERT per row, tables and rows in declared order.
pub fn insert_statements(dataset: &Dataset) -> Vec<Statement> {
	dataset
		.tables
		.iter()
		.flat_map(|table| table.rows.iter().map(|row| insert_row(table, row)))
		.collect()
}

/// Builds delete statements for the configured strategy, tables in
/// **reverse** declared order.
///
/// With [`CleanupStrategy::UsedRows`], a row without identity columns fails
/// the whole build with [`SeedError::NoIdentityColumn`], a configuration
/// error surfaced before any statement executes.
pub fn delete_statements(
	dataset: &Dataset,
	strategy: CleanupStrategy,
) -> SeedResult<Vec<Statement>> {
	let mut statements = Vec::new();
	for table in dataset.tables.iter().rev() {
		match strategy {
			CleanupStrategy::UsedRows => {
				for row in &table.rows {
					statements.push(delete_row(table, row)?);
				}
			}
			CleanupStrategy::DeleteAll => {
				statements.push(Statement::new(format!("DELETE FROM {}", table.name), Vec::new()));
			}
		}
	}
	Ok(statements)
}

fn insert_row(table: &Table, row: &Row) -> Statement {
	let names: Vec<&str> = row.columns.iter().map(|c| c.name.as_str()).collect();
	let placeholders = vec!["?"; names.len()].join(", ");
	Statement::new(
		format!(
			"INSERT INTO {} ({}) VALUES ({})",
			table.name,
			names.join(", "),
			placeholders
		),
		row.columns.iter().map(|c| c.value.clone()).collect(),
	)
}

fn delete_row(table: &Table, row: &Row) -> SeedResult<Statement> {
	let ids = row.id_columns();
	if ids.is_empty() {
		return Err(SeedError::NoIdentityColumn {
			table: table.name.clone(),
		});
	}
	let predicate = ids
		.iter()
		.map(|c| format!("{} = ?", c.name))
		.collect::<Vec<_>>()
		.join(" AND ");
	Ok(Statement::new(
		format!("DELETE FROM {} WHERE {}", table.name, predicate),
		ids.iter().map(|c| c.value.clone()).collect(),
	))
}
