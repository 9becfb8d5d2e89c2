//! Factory definition lookup.
//!
//! Definitions are searched across a process-wide registry of directories,
//! in first-registration order, with the built-in layer last. A factory name
//! that matches nothing falls back to the built-in page definition; missing
//! definitions are never an error.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::builtin;
use super::format::Definition;
use crate::error::FaktoryResult;

/// File extension for on-disk factory definitions.
pub const DEFINITION_EXTENSION: &str = "json";

/// Process-wide registry of factory directories.
static FACTORY_DIRS: Lazy<RwLock<Vec<PathBuf>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// Adds directories to the registry and returns the resulting list.
///
/// Registration order is preserved and duplicates are collapsed; registering
/// an already-known directory leaves its original position unchanged.
pub fn register_dirs<I, P>(paths: I) -> Vec<PathBuf>
where
	I: IntoIterator<Item = P>,
	P: Into<PathBuf>,
{
	let mut dirs = FACTORY_DIRS.write();

	for path in paths {
		let path = path.into();
		if !dirs.contains(&path) {
			dirs.push(path);
		}
	}

	dirs.clone()
}

/// Returns the currently registered directories in search order.
pub fn registered_dirs() -> Vec<PathBuf> {
	FACTORY_DIRS.read().clone()
}

/// Empties the directory registry.
///
/// The registry is process-wide with no other teardown; tests that register
/// directories use this to isolate themselves.
pub fn clear_dirs() {
	FACTORY_DIRS.write().clear();
}

/// Where a factory definition was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
	/// A definition file in a registered directory.
	File(PathBuf),

	/// A built-in definition matching the requested name.
	Builtin(String),

	/// Nothing matched; the built-in page definition stands in.
	Default,
}

impl DefinitionSource {
	/// Returns true when this is the fallback for an undefined factory.
	pub fn is_default(&self) -> bool {
		matches!(self, Self::Default)
	}

	/// Materializes the definition this source points at.
	///
	/// # Errors
	///
	/// Returns an error if a definition file cannot be read or parsed.
	pub fn load(&self) -> FaktoryResult<Definition> {
		match self {
			Self::File(path) => Definition::load(path),
			Self::Builtin(name) => Ok(builtin::definition(name).unwrap_or_else(builtin::page)),
			Self::Default => Ok(builtin::page()),
		}
	}
}

/// Finds the definition source for a factory name.
///
/// Registered directories are checked in order for `<dir>/<name>.json`;
/// the built-in layer is checked last, so a registered file shadows a
/// built-in definition of the same name.
pub fn locate(name: &str) -> DefinitionSource {
	for dir in FACTORY_DIRS.read().iter() {
		let candidate = candidate_path(dir, name);
		if candidate.exists() {
			tracing::debug!(path = %candidate.display(), "matched factory definition file");
			return DefinitionSource::File(candidate);
		}
	}

	if builtin::definition(name).is_some() {
		return DefinitionSource::Builtin(name.to_string());
	}

	tracing::debug!(factory = name, "no definition found, using the default");
	DefinitionSource::Default
}

fn candidate_path(dir: &Path, name: &str) -> PathBuf {
	dir.join(format!("{name}.{DEFINITION_EXTENSION}"))
}
