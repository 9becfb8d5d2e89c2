//! Host persistence seam.
//!
//! The factory engine never talks to a content store directly; every save
//! goes through the [`CmsBackend`] trait. Hosts implement it over their real
//! persistence layer, test suites implement it over an in-memory store.

use serde_json::{Map, Value};
use thiserror::Error;

/// Error reported by a host persistence call.
///
/// Carries the host's human-readable failure message so record-level errors
/// can surface it to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct BackendError(
	/// The host's failure message.
	pub String,
);

impl BackendError {
	/// Creates a backend error from a message.
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

/// Identifier pair assigned to a persisted term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermIds {
	/// Identifier of the term itself.
	pub term_id: u64,
	/// Identifier of the term/taxonomy relationship.
	pub term_taxonomy_id: u64,
}

/// Persistence operations a host content store must provide.
///
/// One attempt per call; no retries. A failed insert leaves the record
/// untouched and is surfaced immediately by the caller.
pub trait CmsBackend: Send + Sync {
	/// Inserts a post-like record and returns its new identifier.
	fn insert_post(&self, fields: &Map<String, Value>) -> Result<u64, BackendError>;

	/// Returns true if the named taxonomy is registered.
	fn taxonomy_exists(&self, name: &str) -> bool;

	/// Registers a taxonomy. `object_types` of `None` registers it as
	/// non-hierarchical with no associated object types.
	fn register_taxonomy(&self, name: &str, object_types: Option<&[String]>);

	/// Looks up a term by name and taxonomy, returning its identifiers when
	/// it already exists.
	fn term_exists(&self, name: &str, taxonomy: &str) -> Option<TermIds>;

	/// Inserts a term and returns its identifiers.
	fn insert_term(
		&self,
		name: &str,
		taxonomy: &str,
		fields: &Map<String, Value>,
	) -> Result<TermIds, BackendError>;
}
