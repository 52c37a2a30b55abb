//! Fixture-file format detection.

use std::path::Path;

/// Supported fixture-file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
	/// JSON (`.json`).
	Json,
	/// YAML (`.yaml` / `.yml`); parsing requires the `yaml` feature.
	Yaml,
}

impl FixtureFormat {
	/// Detects the format from a file extension.
	///
	/// Returns `None` for unknown or missing extensions.
	pub fn from_path(path: &Path) -> Option<Self> {
		let extension = path.extension()?.to_str()?.to_ascii_lowercase();
		match extension.as_str() {
			"json" => Some(Self::Json),
			"yaml" | "yml" => Some(Self::Yaml),
			_ => None,
		}
	}
}
