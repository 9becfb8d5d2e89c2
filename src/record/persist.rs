//! Persistence behavior per record kind.
//!
//! Post-like records are a single insert. Term records run a small state
//! machine that makes creation idempotent by name and taxonomy: register
//! the taxonomy when unknown, adopt an existing term's identifiers when one
//! matches, insert otherwise.

use serde_json::json;

use super::record::Record;
use crate::backend::CmsBackend;
use crate::error::{FaktoryError, FaktoryResult};

pub(super) fn save_post(record: &mut Record, backend: &dyn CmsBackend) -> FaktoryResult<()> {
	match backend.insert_post(record.fields()) {
		Ok(id) => {
			record.set("ID", json!(id));
			Ok(())
		}
		Err(err) => {
			tracing::warn!(error = %err, "post insert rejected by the backend");
			Err(FaktoryError::Persistence(
				"post could not be saved to the database".to_string(),
			))
		}
	}
}

pub(super) fn save_term(record: &mut Record, backend: &dyn CmsBackend) -> FaktoryResult<()> {
	let taxonomy = require_str(record, "taxonomy")?.to_string();
	let name = require_str(record, "name")?.to_string();

	if !backend.taxonomy_exists(&taxonomy) {
		backend.register_taxonomy(&taxonomy, None);
	}

	let ids = match backend.term_exists(&name, &taxonomy) {
		Some(existing) => existing,
		None => backend
			.insert_term(&name, &taxonomy, record.fields())
			.map_err(|err| {
				FaktoryError::Persistence(format!(
					"term could not be saved to the database: {err}"
				))
			})?,
	};

	record.set("ID", json!(ids.term_id));
	record.set("term_id", json!(ids.term_id));
	record.set("term_taxonomy_id", json!(ids.term_taxonomy_id));
	Ok(())
}

fn require_str<'a>(record: &'a Record, field: &str) -> FaktoryResult<&'a str> {
	record.get_str(field).ok_or_else(|| FaktoryError::Validation {
		field: field.to_string(),
		message: "term records need a string value here before saving".to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::{BackendError, TermIds};
	use crate::record::RecordKind;
	use parking_lot::Mutex;
	use rstest::rstest;
	use serde_json::{Map, Value};
	use std::collections::HashSet;

	#[derive(Default)]
	struct StubBackend {
		fail_posts: bool,
		fail_terms: Option<String>,
		known_term: Option<TermIds>,
		taxonomies: Mutex<HashSet<String>>,
		post_inserts: Mutex<usize>,
		term_inserts: Mutex<usize>,
	}

	impl CmsBackend for StubBackend {
		fn insert_post(&self, _fields: &Map<String, Value>) -> Result<u64, BackendError> {
			*self.post_inserts.lock() += 1;
			if self.fail_posts {
				Err(BackendError::new("insert rejected"))
			} else {
				Ok(42)
			}
		}

		fn taxonomy_exists(&self, name: &str) -> bool {
			self.taxonomies.lock().contains(name)
		}

		fn register_taxonomy(&self, name: &str, _object_types: Option<&[String]>) {
			self.taxonomies.lock().insert(name.to_string());
		}

		fn term_exists(&self, _name: &str, _taxonomy: &str) -> Option<TermIds> {
			self.known_term
		}

		fn insert_term(
			&self,
			_name: &str,
			_taxonomy: &str,
			_fields: &Map<String, Value>,
		) -> Result<TermIds, BackendError> {
			*self.term_inserts.lock() += 1;
			match &self.fail_terms {
				Some(message) => Err(BackendError::new(message.clone())),
				None => Ok(TermIds {
					term_id: 7,
					term_taxonomy_id: 8,
				}),
			}
		}
	}

	fn post_record() -> Record {
		let fields = serde_json::json!({"ID": 0, "post_title": "Foo"});
		Record::new(RecordKind::Post, fields.as_object().cloned().unwrap())
	}

	fn term_record() -> Record {
		let fields = serde_json::json!({"ID": 0, "name": "Foo", "taxonomy": "genre"});
		Record::new(RecordKind::Term, fields.as_object().cloned().unwrap())
	}

	#[rstest]
	fn test_save_post_adopts_the_new_id() {
		let backend = StubBackend::default();
		let mut record = post_record();

		record.save(&backend).unwrap();

		assert_eq!(record.id(), 42);
		assert_eq!(*backend.post_inserts.lock(), 1);
	}

	#[rstest]
	fn test_failed_post_insert_leaves_id_unset() {
		let backend = StubBackend {
			fail_posts: true,
			..Default::default()
		};
		let mut record = post_record();

		let error = record.save(&backend).unwrap_err();

		assert!(matches!(error, FaktoryError::Persistence(_)));
		assert_eq!(record.id(), 0);
	}

	#[rstest]
	fn test_save_term_registers_unknown_taxonomy_and_inserts() {
		let backend = StubBackend::default();
		let mut record = term_record();

		record.save(&backend).unwrap();

		assert!(backend.taxonomies.lock().contains("genre"));
		assert_eq!(record.id(), 7);
		assert_eq!(record.get_u64("term_id"), Some(7));
		assert_eq!(record.get_u64("term_taxonomy_id"), Some(8));
	}

	#[rstest]
	fn test_save_term_adopts_an_existing_term_without_inserting() {
		let backend = StubBackend {
			known_term: Some(TermIds {
				term_id: 3,
				term_taxonomy_id: 4,
			}),
			..Default::default()
		};
		let mut record = term_record();

		record.save(&backend).unwrap();

		assert_eq!(record.id(), 3);
		assert_eq!(record.get_u64("term_taxonomy_id"), Some(4));
		assert_eq!(*backend.term_inserts.lock(), 0);
	}

	#[rstest]
	fn test_failed_term_insert_carries_the_backend_message() {
		let backend = StubBackend {
			fail_terms: Some("duplicate slug".to_string()),
			..Default::default()
		};
		let mut record = term_record();

		let error = record.save(&backend).unwrap_err();

		assert!(error.to_string().contains("duplicate slug"));
		assert_eq!(record.id(), 0);
	}

	#[rstest]
	#[case("taxonomy")]
	#[case("name")]
	fn test_save_term_requires_string_fields(#[case] field: &str) {
		let backend = StubBackend::default();
		let mut record = term_record();
		record.set(field, serde_json::json!(11));

		let error = record.save(&backend).unwrap_err();

		match error {
			FaktoryError::Validation { field: failed, .. } => assert_eq!(failed, field),
			other => panic!("expected a validation error, got {other}"),
		}
	}
}
