//! Error types for the fixture lifecycle engine.
//!
//! Every fallible operation in this crate returns [`SeedResult`]. Failures
//! that happen while a unit's fixtures are being prepared or removed are
//! additionally wrapped in [`SeedError::Setup`] / [`SeedError::Teardown`] so
//! the host runner can attribute them to the right lifecycle phase.

use thiserror::Error;

/// Errors that can occur while normalizing, building, or executing fixtures.
#[derive(Debug, Error)]
pub enum SeedError {
	/// The CSV shorthand declaration could not be normalized.
	#[error("malformed CSV dataset: {0}")]
	MalformedCsv(String),

	/// A row carries no identity column, but the cleanup strategy deletes by id.
	///
	/// Detected when delete statements are built, before anything executes.
	#[error("table '{table}': a row has no identity column; mark at least one column with is_id")]
	NoIdentityColumn {
		/// Name of the table whose row lacks an identity column.
		table: String,
	},

	/// A SQL statement failed at the driver level.
	#[error("statement failed: {sql}")]
	Statement {
		/// The SQL text that failed.
		sql: String,
		/// The underlying driver error.
		#[source]
		source: sqlx::Error,
	},

	/// A fixture file could not be loaded.
	#[error("fixture error: {0}")]
	Fixture(String),

	/// I/O failure while reading a fixture file.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON fixture deserialization failure.
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),

	/// YAML fixture deserialization failure.
	#[cfg(feature = "yaml")]
	#[error("yaml error: {0}")]
	Yaml(#[from] serde_yaml::Error),

	/// A failure while preparing a unit's fixtures; the test body must not run.
	#[error("fixture setup failed")]
	Setup(#[source] Box<SeedError>),

	/// A failure while removing a unit's fixtures.
	///
	/// Reported to the host runner as a distinct fixture error; the test's
	/// own pass/fail outcome is already decided at this point.
	#[error("fixture teardown failed")]
	Teardown(#[source] Box<SeedError>),
}

impl SeedError {
	/// Wraps this error as a setup-phase failure.
	pub(crate) fn into_setup(self) -> Self {
		SeedError::Setup(Box::new(self))
	}

	/// Wraps this error as a teardown-phase failure.
	pub(crate) fn into_teardown(self) -> Self {
		SeedError::Teardown(Box::new(self))
	}
}

/// Result type alias used throughout the crate.
pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn malformed_csv_display() {
		let error = SeedError::MalformedCsv("missing header line".to_string());
		assert_eq!(
			error.to_string(),
			"malformed CSV dataset: missing header line"
		);
	}

	#[rstest]
	fn no_identity_column_display() {
		let error = SeedError::NoIdentityColumn {
			table: "child".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"table 'child': a row has no identity column; mark at least one column with is_id"
		);
	}

	#[rstest]
	fn setup_wrapper_keeps_source() {
		let error = SeedError::MalformedCsv("bad".to_string()).into_setup();
		assert_eq!(error.to_string(), "fixture setup failed");
		assert!(matches!(
			error,
			SeedError::Setup(inner) if matches!(*inner, SeedError::MalformedCsv(_))
		));
	}

	#[rstest]
	fn io_error_from() {
		let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such fixture");
		let error: SeedError = io_error.into();
		assert!(matches!(error, SeedError::Io(_)));
	}
}
