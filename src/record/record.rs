//! The resolved record container.

use serde_json::{Map, Value};

use super::kind::RecordKind;
use super::persist;
use crate::backend::CmsBackend;
use crate::error::FaktoryResult;

/// A fully resolved factory record.
///
/// Fields come straight from the merged definition, so a record has no fixed
/// schema beyond what its factory declared; access is by field name. The
/// `ID` field stays 0 until the record is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	kind: RecordKind,
	fields: Map<String, Value>,
}

impl Record {
	/// Creates a record of the given kind over a field mapping.
	pub fn new(kind: RecordKind, fields: Map<String, Value>) -> Self {
		Self { kind, fields }
	}

	/// Returns the record's kind.
	pub fn kind(&self) -> RecordKind {
		self.kind
	}

	/// Returns the full field mapping.
	pub fn fields(&self) -> &Map<String, Value> {
		&self.fields
	}

	/// Returns a field value by name.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.fields.get(field)
	}

	/// Returns a field as a string slice, when it holds a string.
	pub fn get_str(&self, field: &str) -> Option<&str> {
		self.get(field).and_then(Value::as_str)
	}

	/// Returns a field as an unsigned integer, when it holds one.
	pub fn get_u64(&self, field: &str) -> Option<u64> {
		self.get(field).and_then(Value::as_u64)
	}

	/// Returns true if the record carries the field.
	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	/// Sets a field value, replacing any existing value.
	pub fn set(&mut self, field: impl Into<String>, value: Value) {
		self.fields.insert(field.into(), value);
	}

	/// Returns the persisted identifier, or 0 for an unpersisted record.
	pub fn id(&self) -> u64 {
		self.get_u64("ID").unwrap_or(0)
	}

	/// Returns a new record of another kind carrying the same field values.
	///
	/// The receiver is left unmodified; this is a reinterpretation of the
	/// field mapping, not a transfer.
	pub fn as_kind(&self, kind: RecordKind) -> Record {
		Record {
			kind,
			fields: self.fields.clone(),
		}
	}

	/// Consumes the record and reinterprets it as another kind.
	pub fn into_kind(self, kind: RecordKind) -> Record {
		Record { kind, ..self }
	}

	/// Persists the record through the host backend.
	///
	/// Post-like records insert once and adopt the returned identifier as
	/// `ID`. Term records are idempotent by name and taxonomy: saving a term
	/// that already exists adopts the existing identifiers without a second
	/// insert.
	///
	/// # Errors
	///
	/// Returns [`FaktoryError::Persistence`] when the backend insert fails;
	/// the record's identity fields are left unchanged.
	///
	/// [`FaktoryError::Persistence`]: crate::FaktoryError::Persistence
	pub fn save(&mut self, backend: &dyn CmsBackend) -> FaktoryResult<()> {
		match self.kind {
			RecordKind::Post => persist::save_post(self, backend),
			RecordKind::Term => persist::save_term(self, backend),
		}
	}
}
