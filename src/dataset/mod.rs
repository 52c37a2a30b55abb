//! In-memory dataset model: the tables, rows, and columns a test expects
//! to find in the database when it starts.
//!
//! A [`Dataset`] is an *ordered* collection of [`Table`]s. The declared
//! order is the insertion order (parent tables before dependent tables)
//! and is reversed when delete statements are generated, so
//! referential-integrity constraints hold without disabling them. Cases
//! the ordering cannot satisfy (cycles) are handled with set-up /
//! tear-down queries instead.
//!
//! Datasets are built with struct literals or the builder methods below,
//! from the CSV shorthand in [`csv`], or from fixture files via
//! [`parser::DatasetParser`].

pub mod csv;
pub mod format;
pub mod parser;

use serde::{Deserialize, Serialize};

/// A single column value within a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	/// Column name as it appears in the physical table.
	pub name: String,
	/// Literal value bound at execution time; `None` binds SQL NULL.
	///
	/// Values are passed to the driver as text and coerced to the column's
	/// actual SQL type there; the engine performs no type inference.
	pub value: Option<String>,
	/// Marks this column as part of the row's identity, used to target the
	/// row precisely when cleanup deletes by id.
	#[serde(default)]
	pub is_id: bool,
}

impl Column {
	/// Creates a plain column.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: Some(value.into()),
			is_id: false,
		}
	}

	/// Creates an identity column.
	pub fn id(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: Some(value.into()),
			is_id: true,
		}
	}

	/// Creates a column bound as SQL NULL.
	pub fn null(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: None,
			is_id: false,
		}
	}
}

/// An ordered set of columns inserted as one row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
	/// Columns in declared order; the order defines the generated column
	/// list of the row's INSERT statement.
	pub columns: Vec<Column>,
}

impl Row {
	/// Creates a row from its columns.
	pub fn new(columns: Vec<Column>) -> Self {
		Self { columns }
	}

	/// The columns flagged as this row's identity.
	pub(crate) fn id_columns(&self) -> Vec<&Column> {
		self.columns.iter().filter(|c| c.is_id).collect()
	}
}

/// A physical table and the rows to insert into it.
///
/// Rows need not share a column signature; each row generates its own
/// INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
	/// Physical relation name.
	pub name: String,
	/// Rows in declared order.
	#[serde(default)]
	pub rows: Vec<Row>,
}

impl Table {
	/// Creates an empty table declaration.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			rows: Vec::new(),
		}
	}

	/// Appends a row.
	pub fn with_row(mut self, row: Row) -> Self {
		self.rows.push(row);
		self
	}
}

/// An ordered collection of tables representing the data state a test
/// expects at start.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
	/// Tables in insertion order.
	#[serde(default)]
	pub tables: Vec<Table>,
}

impl Dataset {
	/// Creates an empty dataset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a table; insertion order is the declared order.
	pub fn with_table(mut self, table: Table) -> Self {
		self.tables.push(table);
		self
	}

	/// Whether the dataset declares no tables at all.
	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn parent_child() -> Dataset {
		Dataset::new()
			.with_table(Table::new("parent").with_row(Row::new(vec![
				Column::id("id", "2"),
				Column::new("name", "class-parent"),
			])))
			.with_table(Table::new("child").with_row(Row::new(vec![
				Column::id("id", "2"),
				Column::new("name", "class-child"),
				Column::new("parent_id", "2"),
			])))
	}

	#[rstest]
	fn builders_preserve_declared_order() {
		let dataset = parent_child();
		let names: Vec<&str> = dataset.tables.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, ["parent", "child"]);
		assert_eq!(dataset.tables[1].rows[0].columns[2].value.as_deref(), Some("2"));
	}

	#[rstest]
	fn id_columns_filters_by_flag() {
		let row = Row::new(vec![
			Column::id("id", "1"),
			Column::new("name", "a"),
			Column::null("note"),
		]);
		let ids: Vec<&str> = row.id_columns().iter().map(|c| c.name.as_str()).collect();
		assert_eq!(ids, ["id"]);
	}

	#[rstest]
	fn serde_round_trip() {
		let dataset = parent_child();
		let json = serde_json::to_string(&dataset).unwrap();
		let back: Dataset = serde_json::from_str(&json).unwrap();
		assert_eq!(back, dataset);
	}

	#[rstest]
	fn is_id_defaults_to_false_in_fixture_content() {
		let column: Column = serde_json::from_str(r#"{"name": "id", "value": "1"}"#).unwrap();
		assert!(!column.is_id);
	}
}
