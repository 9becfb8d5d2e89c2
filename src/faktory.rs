//! The public factory facade.
//!
//! [`Faktory`] ties the pieces together: it resolves factory names through
//! the definition layer, instantiates [`Record`]s, and persists them through
//! the host backend it was built with.
//!
//! Naming follows the usual factory split: `build` produces an in-memory
//! record, `create` also persists it, `build_batch` produces several
//! unpersisted records at once.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::backend::CmsBackend;
use crate::definition;
use crate::error::{FaktoryError, FaktoryResult};
use crate::record::{Record, RecordKind};

/// Entry point for creating factory records.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use faktory::Faktory;
/// use serde_json::json;
///
/// let faktory = Faktory::new(Arc::new(MyBackend::connect()?));
/// Faktory::register_dirs(["tests/factories"]);
///
/// let page = faktory.build("page", json!({"title": "About us"}))?;
/// let saved = faktory.create("post", json!({"status": "draft"}))?;
/// let many = faktory.build_batch(3, "post", json!({"post_title": "Foo"}), None)?;
/// ```
pub struct Faktory {
	backend: Arc<dyn CmsBackend>,
}

impl Faktory {
	/// Creates a facade over a host persistence backend.
	pub fn new(backend: Arc<dyn CmsBackend>) -> Self {
		Self { backend }
	}

	/// Returns the backend records are persisted through.
	pub fn backend(&self) -> &dyn CmsBackend {
		self.backend.as_ref()
	}

	/// Adds directories to the process-wide factory search path and returns
	/// the resulting list. Duplicates are collapsed, order is preserved.
	pub fn register_dirs<I, P>(paths: I) -> Vec<PathBuf>
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		definition::register_dirs(paths)
	}

	/// Empties the factory search path. Primarily useful for test isolation.
	pub fn clear_dirs() {
		definition::clear_dirs()
	}

	/// Resolves a factory and returns an unpersisted record.
	///
	/// `overrides` must be a JSON object (or null for none); its entries win
	/// over the definition's defaults, with shorthand keys translated to
	/// their canonical names.
	///
	/// # Errors
	///
	/// Returns an error for a non-object override value or an unreadable
	/// definition file. An unknown factory name is not an error.
	pub fn build(&self, name: &str, overrides: Value) -> FaktoryResult<Record> {
		let overrides = into_override_map(overrides)?;
		let resolved = definition::resolve(name, overrides)?;
		Ok(Record::new(resolved.kind, resolved.fields))
	}

	/// Resolves a factory, persists the record, and returns it.
	///
	/// # Errors
	///
	/// Everything [`build`](Self::build) can return, plus
	/// [`FaktoryError::Persistence`] when the backend rejects the save.
	pub fn create(&self, name: &str, overrides: Value) -> FaktoryResult<Record> {
		let mut record = self.build(name, overrides)?;
		record.save(self.backend.as_ref())?;
		Ok(record)
	}

	/// Produces `count` unpersisted records from one factory.
	///
	/// Every string-valued override is suffixed with the record's zero-based
	/// position, so `"Foo Bar"` becomes `"Foo Bar 0"`, `"Foo Bar 1"`, … on
	/// successive records; other values pass through unchanged. A `kind`
	/// forces every record to that kind regardless of what the definition
	/// selects.
	pub fn build_batch(
		&self,
		count: usize,
		name: &str,
		overrides: Value,
		kind: Option<RecordKind>,
	) -> FaktoryResult<Vec<Record>> {
		let overrides = into_override_map(overrides)?;
		let mut records = Vec::with_capacity(count);

		for index in 0..count {
			let resolved = definition::resolve(name, suffix_strings(&overrides, index))?;
			records.push(Record::new(kind.unwrap_or(resolved.kind), resolved.fields));
		}

		Ok(records)
	}
}

fn into_override_map(overrides: Value) -> FaktoryResult<Map<String, Value>> {
	match overrides {
		Value::Object(map) => Ok(map),
		Value::Null => Ok(Map::new()),
		_ => Err(FaktoryError::Validation {
			field: "overrides".to_string(),
			message: "must be a JSON object or null".to_string(),
		}),
	}
}

/// Clones an override mapping with every string value position-suffixed.
fn suffix_strings(overrides: &Map<String, Value>, index: usize) -> Map<String, Value> {
	overrides
		.iter()
		.map(|(key, value)| {
			let value = match value {
				Value::String(s) => Value::String(format!("{s} {index}")),
				other => other.clone(),
			};
			(key.clone(), value)
		})
		.collect()
}
