//! Fixture-file parsing into the dataset model.
//!
//! Datasets may be declared in files instead of code, using the model's
//! serde shape:
//!
//! ```json
//! {
//!   "tables": [
//!     {
//!       "name": "parent",
//!       "rows": [
//!         {
//!           "columns": [
//!             { "name": "id", "value": "1", "is_id": true },
//!             { "name": "name", "value": "method-parent" }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A `value` of `null` binds SQL NULL; `is_id` defaults to `false`.

use std::path::Path;

use super::Dataset;
use super::format::FixtureFormat;
use crate::error::{SeedError, SeedResult};

/// Parser for dataset fixture files.
#[derive(Debug, Default)]
pub struct DatasetParser;

impl DatasetParser {
	/// Creates a new parser.
	pub fn new() -> Self {
		Self
	}

	/// Parses a fixture file, detecting the format from its extension.
	pub fn parse_file(&self, path: &Path) -> SeedResult<Dataset> {
		let format = FixtureFormat::from_path(path).ok_or_else(|| {
			SeedError::Fixture(format!(
				"unsupported fixture extension: {}",
				path.display()
			))
		})?;
		let content = std::fs::read_to_string(path)?;
		self.parse_str(&content, format)
	}

	/// Parses fixture content in the given format.
	pub fn parse_str(&self, content: &str, format: FixtureFormat) -> SeedResult<Dataset> {
		match format {
			FixtureFormat::Json => Ok(serde_json::from_str(content)?),
			FixtureFormat::Yaml => self.parse_yaml(content),
		}
	}

	#[cfg(feature = "yaml")]
	fn parse_yaml(&self, content: &str) -> SeedResult<Dataset> {
		Ok(serde_yaml::from_str(content)?)
	}

	#[cfg(not(feature = "yaml"))]
	fn parse_yaml(&self, _content: &str) -> SeedResult<Dataset> {
		Err(SeedError::Fixture(
			"YAML fixtures require the 'yaml' feature".to_string(),
		))
	}
}
