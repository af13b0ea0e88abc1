//! Tag table configuration
//!
//! The factory table is static configuration. By default it holds the
//! built-in HTML tag list; a [`TagConfig`] can extend it (custom elements,
//! SVG children) or replace it entirely.
//!
//! ```toml
//! include_defaults = true
//! tags = ["my-widget", "path", "circle"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a [`TagConfig`] or validating tag names
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The configuration file could not be read
	#[error("Failed to read {path}: {source}")]
	Io {
		/// File that failed
		path: String,
		/// Underlying I/O error
		source: std::io::Error,
	},

	/// TOML syntax or schema error
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// JSON syntax or schema error
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Neither `.toml` nor `.json`
	#[error("Unsupported format: {0} (supported formats: .toml, .json)")]
	UnsupportedFormat(String),

	/// A tag name is empty
	#[error("tag name is empty")]
	EmptyTagName,

	/// A tag name contains characters an element name cannot have
	#[error("invalid tag name `{0}`: expected an ASCII letter followed by letters, digits or `-`")]
	InvalidTagName(String),
}

/// Which tags the factory table exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagConfig {
	/// Start from the built-in HTML tag list
	pub include_defaults: bool,
	/// Additional tag names
	pub tags: Vec<String>,
}

impl Default for TagConfig {
	fn default() -> Self {
		Self {
			include_defaults: true,
			tags: Vec::new(),
		}
	}
}

impl TagConfig {
	/// Parse a TOML document
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] on syntax errors and unknown keys.
	///
	/// ## Example
	///
	/// ```
	/// use minivan_pages::config::TagConfig;
	///
	/// let config = TagConfig::from_toml_str(r#"tags = ["my-widget"]"#).unwrap();
	/// assert!(config.include_defaults);
	/// assert_eq!(config.tags, vec!["my-widget".to_string()]);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Parse a JSON document
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Json`] on syntax errors and unknown keys.
	pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(source)?)
	}

	/// Load from a `.toml` or `.json` file
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Io`] when the file cannot be read,
	/// [`ConfigError::UnsupportedFormat`] for other extensions, and the
	/// parser's error otherwise.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.display().to_string(),
			source,
		})?;

		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents),
			Some("json") => Self::from_json_str(&contents),
			_ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_default_includes_builtin_tags() {
		let config = TagConfig::default();
		assert!(config.include_defaults);
		assert!(config.tags.is_empty());
	}

	#[rstest]
	#[case("", TagConfig::default())]
	#[case(
		"include_defaults = false\ntags = [\"x-a\", \"x-b\"]",
		TagConfig { include_defaults: false, tags: vec!["x-a".into(), "x-b".into()] }
	)]
	fn test_from_toml_str(#[case] source: &str, #[case] expected: TagConfig) {
		assert_eq!(TagConfig::from_toml_str(source).unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_key_rejected() {
		let err = TagConfig::from_toml_str("tag = []").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}

	#[rstest]
	fn test_from_json_str() {
		let config = TagConfig::from_json_str(r#"{"tags": ["path"]}"#).unwrap();
		assert_eq!(config.tags, vec!["path".to_string()]);
	}

	#[rstest]
	#[case("tags.toml", "tags = [\"circle\"]")]
	#[case("tags.json", r#"{"tags": ["circle"]}"#)]
	fn test_from_file(#[case] name: &str, #[case] contents: &str) {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(name);
		let mut file = std::fs::File::create(&path).unwrap();
		file.write_all(contents.as_bytes()).unwrap();

		let config = TagConfig::from_file(&path).unwrap();
		assert_eq!(config.tags, vec!["circle".to_string()]);
	}

	#[rstest]
	fn test_from_file_errors() {
		let dir = tempfile::tempdir().unwrap();

		let missing = TagConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
		assert!(matches!(missing, ConfigError::Io { .. }));

		let yaml = dir.path().join("tags.yaml");
		std::fs::write(&yaml, "tags: []").unwrap();
		let unsupported = TagConfig::from_file(&yaml).unwrap_err();
		assert!(matches!(unsupported, ConfigError::UnsupportedFormat(_)));
	}
}
