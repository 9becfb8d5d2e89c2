//! In-memory mock of the host persistence seam.
//!
//! Records every call so tests can assert on call counts and captured
//! field data. Failure modes are opted into per instance.

use std::collections::{HashMap, HashSet};

use faktory::{BackendError, CmsBackend, TermIds};
use parking_lot::Mutex;
use serde_json::{Map, Value};

/// Serializes tests that mutate the process-wide factory directory
/// registry, so they do not observe each other's registrations.
pub static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

/// In-memory content store standing in for the host CMS.
pub struct MockCms {
	fail_posts: bool,
	fail_terms: Option<String>,
	next_post_id: Mutex<u64>,
	posts: Mutex<Vec<Map<String, Value>>>,
	taxonomies: Mutex<HashSet<String>>,
	terms: Mutex<HashMap<(String, String), TermIds>>,
	next_term_id: Mutex<u64>,
	term_inserts: Mutex<usize>,
}

impl MockCms {
	/// Creates a store where every insert succeeds.
	pub fn new() -> Self {
		Self {
			fail_posts: false,
			fail_terms: None,
			next_post_id: Mutex::new(1),
			posts: Mutex::new(Vec::new()),
			taxonomies: Mutex::new(HashSet::new()),
			terms: Mutex::new(HashMap::new()),
			next_term_id: Mutex::new(1),
			term_inserts: Mutex::new(0),
		}
	}

	/// Creates a store whose post inserts are rejected.
	pub fn failing_posts() -> Self {
		Self {
			fail_posts: true,
			..Self::new()
		}
	}

	/// Creates a store whose term inserts fail with the given message.
	pub fn failing_terms(message: &str) -> Self {
		Self {
			fail_terms: Some(message.to_string()),
			..Self::new()
		}
	}

	/// Number of post insert attempts, including rejected ones.
	pub fn post_insert_count(&self) -> usize {
		self.posts.lock().len()
	}

	/// Number of term insert attempts, including rejected ones.
	pub fn term_insert_count(&self) -> usize {
		*self.term_inserts.lock()
	}

	/// Returns true if the taxonomy has been registered.
	pub fn has_taxonomy(&self, name: &str) -> bool {
		self.taxonomies.lock().contains(name)
	}

	/// The field mapping captured by the most recent post insert.
	pub fn last_post(&self) -> Option<Map<String, Value>> {
		self.posts.lock().last().cloned()
	}
}

impl Default for MockCms {
	fn default() -> Self {
		Self::new()
	}
}

impl CmsBackend for MockCms {
	fn insert_post(&self, fields: &Map<String, Value>) -> Result<u64, BackendError> {
		self.posts.lock().push(fields.clone());

		if self.fail_posts {
			return Err(BackendError::new("insert rejected"));
		}

		let mut next = self.next_post_id.lock();
		let id = *next;
		*next += 1;
		Ok(id)
	}

	fn taxonomy_exists(&self, name: &str) -> bool {
		self.taxonomies.lock().contains(name)
	}

	fn register_taxonomy(&self, name: &str, _object_types: Option<&[String]>) {
		self.taxonomies.lock().insert(name.to_string());
	}

	fn term_exists(&self, name: &str, taxonomy: &str) -> Option<TermIds> {
		self.terms
			.lock()
			.get(&(name.to_string(), taxonomy.to_string()))
			.copied()
	}

	fn insert_term(
		&self,
		name: &str,
		taxonomy: &str,
		_fields: &Map<String, Value>,
	) -> Result<TermIds, BackendError> {
		*self.term_inserts.lock() += 1;

		if let Some(message) = &self.fail_terms {
			return Err(BackendError::new(message.clone()));
		}

		let mut next = self.next_term_id.lock();
		let ids = TermIds {
			term_id: *next,
			term_taxonomy_id: *next + 1,
		};
		*next += 2;

		self.terms
			.lock()
			.insert((name.to_string(), taxonomy.to_string()), ids);
		Ok(ids)
	}
}
