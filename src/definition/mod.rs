//! Factory definitions: format, built-in layer, lookup, and resolution.
//!
//! A factory is defined once per name — either as a `<name>.json` file in a
//! registered directory or as a built-in definition — and resolved fresh on
//! every use. See [`resolve`] for the full reconciliation pipeline.

pub mod builtin;
mod format;
mod locator;
mod resolver;

pub use format::Definition;
pub use locator::{
	DEFINITION_EXTENSION, DefinitionSource, clear_dirs, locate, register_dirs, registered_dirs,
};
pub use resolver::{Resolved, resolve};
