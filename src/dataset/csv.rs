//! CSV-shorthand dataset declarations.
//!
//! The shorthand flattens a table into delimited text lines: line 0 is the
//! header (column names), every later line is one row of values. The
//! designated id columns are translated into the `is_id` flag on the
//! matching column of every row, so the shorthand normalizes into exactly
//! the model the structured builders produce.
//!
//! Field syntax: comma-delimited, optional single-quote (`'`) quoting for
//! fields containing delimiters, backslash escapes (`\n`, `\t`, `\r`, and
//! `\<any>` for the character itself), and surrounding whitespace trimmed
//! outside quotes. A field equal to the null sentinel (default
//! [`DEFAULT_NULL_VALUE`], quoted or not) normalizes to SQL NULL.

use super::{Column, Dataset, Row, Table};
use crate::error::{SeedError, SeedResult};

/// Default sentinel that normalizes to SQL NULL.
pub const DEFAULT_NULL_VALUE: &str = "[null]";

/// A table declared as delimited text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
	/// Physical table name.
	pub name: String,
	/// Text lines; line 0 is the header.
	pub rows: Vec<String>,
	/// Header names that mark identity columns in every row
	/// (matched ASCII case-insensitively).
	pub id_columns: Vec<String>,
}

impl CsvTable {
	/// Creates a CSV table declaration.
	///
	/// # Example
	///
	/// ```
	/// use sqlseed::dataset::csv::CsvTable;
	///
	/// let table = CsvTable::new(
	/// 	"child",
	/// 	vec!["id, name, parent_id", "1, method-child, 1"],
	/// 	vec!["id"],
	/// );
	/// assert_eq!(table.rows.len(), 2);
	/// ```
	pub fn new(
		name: impl Into<String>,
		rows: Vec<impl Into<String>>,
		id_columns: Vec<impl Into<String>>,
	) -> Self {
		Self {
			name: name.into(),
			rows: rows.into_iter().map(Into::into).collect(),
			id_columns: id_columns.into_iter().map(Into::into).collect(),
		}
	}

	/// Normalizes the shorthand into a [`Table`], flagging identity columns.
	///
	/// Fails with [`SeedError::MalformedCsv`] when the header is missing or
	/// empty, header names repeat, a data line's field count does not match
	/// the header, an id column does not appear in the header, or an id
	/// column normalizes to NULL.
	pub fn normalize(&self, null_value: &str) -> SeedResult<Table> {
		let mut lines = self.rows.iter();
		let header_line = lines
			.next()
			.ok_or_else(|| self.malformed("missing header line"))?;
		let header = split_line(header_line, &self.name)?;
		self.validate_header(&header, null_value)?;

		let mut table = Table::new(&self.name);
		for line in lines {
			let fields = split_line(line, &self.name)?;
			if fields.len() != header.len() {
				return Err(self.malformed(&format!(
					"line '{line}' has {} fields, header has {}",
					fields.len(),
					header.len()
				)));
			}
			let mut row = Row::default();
			for (name, raw) in header.iter().zip(fields) {
				let is_id = self.is_id_column(name);
				let value = if raw == null_value { None } else { Some(raw) };
				if is_id && value.is_none() {
					return Err(
						self.malformed(&format!("id column '{name}' may not be NULL"))
					);
				}
				row.columns.push(Column {
					name: name.clone(),
					value,
					is_id,
				});
			}
			table.rows.push(row);
		}
		Ok(table)
	}

	fn validate_header(&self, header: &[String], null_value: &str) -> SeedResult<()> {
		for (index, name) in header.iter().enumerate() {
			if name.is_empty() || name == null_value {
				return Err(self.malformed("empty header column"));
			}
			if header[..index]
				.iter()
				.any(|seen| seen.eq_ignore_ascii_case(name))
			{
				return Err(self.malformed(&format!("duplicate header column '{name}'")));
			}
		}
		for id in &self.id_columns {
			if !header.iter().any(|name| name.eq_ignore_ascii_case(id)) {
				return Err(self.malformed(&format!(
					"id column '{id}' does not appear in the header"
				)));
			}
		}
		Ok(())
	}

	fn is_id_column(&self, name: &str) -> bool {
		self.id_columns.iter().any(|id| id.eq_ignore_ascii_case(name))
	}

	fn malformed(&self, message: &str) -> SeedError {
		SeedError::MalformedCsv(format!("table '{}': {message}", self.name))
	}
}

/// A complete CSV-shorthand dataset declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDataSet {
	/// Tables in insertion order.
	pub tables: Vec<CsvTable>,
	/// Sentinel value that normalizes to SQL NULL.
	pub null_value: String,
}

impl Default for CsvDataSet {
	fn default() -> Self {
		Self {
			tables: Vec::new(),
			null_value: DEFAULT_NULL_VALUE.to_string(),
		}
	}
}

impl CsvDataSet {
	/// Creates an empty CSV dataset with the default null sentinel.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a table declaration.
	pub fn with_table(mut self, table: CsvTable) -> Self {
		self.tables.push(table);
		self
	}

	/// Overrides the null sentinel.
	pub fn with_null_value(mut self, null_value: impl Into<String>) -> Self {
		self.null_value = null_value.into();
		self
	}

	/// Normalizes every table into a [`Dataset`], preserving declared order.
	pub fn normalize(&self) -> SeedResult<Dataset> {
		let mut dataset = Dataset::new();
		for table in &self.tables {
			dataset = dataset.with_table(table.normalize(&self.null_value)?);
		}
		Ok(dataset)
	}
}

/// Splits one CSV line into unquoted, unescaped field strings.
fn split_line(line: &str, table: &str) -> SeedResult<Vec<String>> {
	let mut fields = Vec::new();
	let mut buf = String::new();
	let mut quoted = false;
	let mut in_quotes = false;
	let mut closed = false;
	let mut chars = line.chars();

	while let Some(c) = chars.next() {
		match c {
			'\\' => {
				if closed {
					return Err(malformed(table, line, "unexpected character after closing quote"));
				}
				match chars.next() {
					Some('n') => buf.push('\n'),
					Some('t') => buf.push('\t'),
					Some('r') => buf.push('\r'),
					Some(other) => buf.push(other),
					None => buf.push('\\'),
				}
			}
			'\'' if in_quotes => {
				in_quotes = false;
				closed = true;
			}
			'\'' if !quoted && buf.trim().is_empty() => {
				buf.clear();
				quoted = true;
				in_quotes = true;
			}
			',' if !in_quotes => {
				fields.push(finish_field(&mut buf, quoted));
				quoted = false;
				closed = false;
			}
			_ if closed => {
				if !c.is_whitespace() {
					return Err(malformed(table, line, "unexpected character after closing quote"));
				}
			}
			_ => buf.push(c),
		}
	}
	if in_quotes {
		return Err(malformed(table, line, "unterminated quote"));
	}
	fields.push(finish_field(&mut buf, quoted));
	Ok(fields)
}

fn finish_field(buf: &mut String, quoted: bool) -> String {
	let value = if quoted {
		buf.clone()
	} else {
		buf.trim().to_string()
	};
	buf.clear();
	value
}

fn malformed(table: &str, line: &str, message: &str) -> SeedError {
	SeedError::MalformedCsv(format!("table '{table}': line '{line}': {message}"))
}
