//! Factory definition format.
//!
//! A definition is a single JSON object mapping canonical field names to
//! default values. The reserved `"kind"` key names the record kind to
//! instantiate and never reaches the finished record.
//!
//! # Example
//!
//! ```json
//! {
//!   "kind": "post",
//!   "post_status": "draft",
//!   "meta_input": { "masthead__title": "T" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FaktoryError, FaktoryResult};
use crate::record::RecordKind;

/// A loaded factory definition: default field values plus an optional
/// record-kind selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Definition {
	/// Record kind named by the definition, when present.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,

	/// Default field values.
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

impl Definition {
	/// Creates a definition from a field mapping, with no kind selector.
	pub fn new(fields: Map<String, Value>) -> Self {
		Self { kind: None, fields }
	}

	/// Sets the kind selector.
	pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	/// Resolves the kind selector to a [`RecordKind`].
	///
	/// A definition without a selector, or with a selector naming no known
	/// kind, resolves to the post-like default.
	pub fn record_kind(&self) -> RecordKind {
		match &self.kind {
			Some(name) => RecordKind::from_name(name).unwrap_or_else(|| {
				tracing::warn!(kind = %name, "unknown record kind in definition, using the default");
				RecordKind::default()
			}),
			None => RecordKind::default(),
		}
	}

	/// Parses a definition from JSON text.
	///
	/// # Errors
	///
	/// Returns an error if the content is not valid JSON or the top-level
	/// value is not an object.
	pub fn parse(content: &str) -> FaktoryResult<Self> {
		let value: Value = serde_json::from_str(content)?;

		if !value.is_object() {
			return Err(FaktoryError::InvalidDefinition(
				"expected a JSON object at the top level".to_string(),
			));
		}

		Ok(serde_json::from_value(value)?)
	}

	/// Reads and parses a definition file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read, or an
	/// [`FaktoryError::InvalidDefinition`] naming the file when its content
	/// does not parse.
	pub fn load(path: &Path) -> FaktoryResult<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::parse(&content)
			.map_err(|err| FaktoryError::InvalidDefinition(format!("{}: {err}", path.display())))
	}
}
