//! Convenience re-exports for common usage.
//!
//! # Example
//!
//! ```ignore
//! use faktory::prelude::*;
//! ```

// Error types
pub use crate::error::{FaktoryError, FaktoryResult};

// Persistence seam
pub use crate::backend::{BackendError, CmsBackend, TermIds};

// Definition layer
pub use crate::definition::{
	DEFINITION_EXTENSION, Definition, DefinitionSource, clear_dirs, locate, register_dirs,
	registered_dirs, resolve,
};

// Record types
pub use crate::record::{Record, RecordKind};

// Facade
pub use crate::faktory::Faktory;
