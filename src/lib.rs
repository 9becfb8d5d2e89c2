//! Test-data factories for CMS content records.
//!
//! This crate removes test-setup boilerplate when working against a CMS
//! data model: given a short factory name it produces a fully populated
//! record (post, page, term, or any custom content type) with generated
//! defaults, optionally persists it through the host's persistence API, and
//! lets callers override any subset of fields using canonical or shorthand
//! field names.
//!
//! # Quick Start
//!
//! Point the factory at your backend and build records:
//!
//! ```ignore
//! use std::sync::Arc;
//! use faktory::{Faktory, RecordKind};
//! use serde_json::json;
//!
//! let faktory = Faktory::new(Arc::new(TestBackend::default()));
//!
//! // In-memory only
//! let page = faktory.build("page", json!({"title": "About us"}))?;
//! assert_eq!(page.get_str("post_title"), Some("About us"));
//!
//! // Persisted through the backend
//! let post = faktory.create("post", json!({"status": "draft"}))?;
//! assert_ne!(post.id(), 0);
//!
//! // Batches with position-suffixed strings
//! let posts = faktory.build_batch(2, "post", json!({"post_title": "Foo"}), None)?;
//! assert_eq!(posts[1].get_str("post_title"), Some("Foo 1"));
//! ```
//!
//! # Factory definitions
//!
//! A factory is a JSON object in a `<name>.json` file, mapping canonical
//! field names to defaults, with the reserved `"kind"` key selecting the
//! record kind:
//!
//! ```json
//! {
//!   "kind": "post",
//!   "post_status": "draft",
//!   "meta_input": { "masthead__title": "T" }
//! }
//! ```
//!
//! Definition directories are registered with
//! [`Faktory::register_dirs`] and searched in registration order; built-in
//! `page` and `term` definitions form the final layer. A name with no
//! definition anywhere still builds: the page defaults stand in and
//! `post_type` becomes the requested name.
//!
//! # Architecture
//!
//! - [`definition`] — definition format, built-in layer, directory lookup,
//!   and the default/override merge
//! - [`record`] — the [`Record`](record::Record) container and its
//!   kind-specific save behavior
//! - [`backend`] — the [`CmsBackend`](backend::CmsBackend) seam hosts
//!   implement over their persistence layer
//! - [`keys`] — shorthand-to-canonical field-name translation
//! - [`faktory`] — the [`Faktory`](faktory::Faktory) facade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;
pub mod definition;
pub mod error;
pub mod faktory;
pub mod keys;
pub mod prelude;
pub mod record;

// Re-export commonly used types at crate root
pub use backend::{BackendError, CmsBackend, TermIds};
pub use definition::{Definition, DefinitionSource};
pub use error::{FaktoryError, FaktoryResult};
pub use faktory::Faktory;
pub use record::{Record, RecordKind};
