//! Default/override reconciliation.
//!
//! The resolver turns a factory name plus caller overrides into the final
//! field mapping and record kind: it locates the definition, seeds
//! `post_type` for undefined factories, canonicalizes shorthand keys, and
//! merges overrides over the definition's defaults.

use serde_json::{Map, Value};

use super::locator;
use crate::error::FaktoryResult;
use crate::keys;
use crate::record::RecordKind;

/// Reserved definition key naming the record kind to instantiate.
const KIND_KEY: &str = "kind";

/// A fully resolved factory: merged fields and the kind to instantiate.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
	/// The merged field mapping, with the kind selector stripped.
	pub fields: Map<String, Value>,

	/// The record kind to instantiate.
	pub kind: RecordKind,
}

/// Resolves a factory name and caller overrides into a [`Resolved`].
///
/// The definition is read fresh on every call, so generated defaults and
/// edits to definition files are always picked up.
///
/// # Errors
///
/// Returns an error if a located definition file cannot be read or parsed.
/// A name with no definition anywhere is not an error; the built-in page
/// definition stands in and `post_type` becomes the requested name.
pub fn resolve(name: &str, mut overrides: Map<String, Value>) -> FaktoryResult<Resolved> {
	let source = locator::locate(name);

	// An undefined factory still carries a meaningful type: the requested
	// name becomes the post type unless the caller pinned one. A shorthand
	// `type` override is applied later and wins over this seed.
	if source.is_default() && !overrides.contains_key("post_type") {
		overrides.insert("post_type".to_string(), Value::String(name.to_string()));
	}

	let definition = source.load()?;
	let kind = definition.record_kind();

	let overrides = keys::canonicalize(kind, overrides);
	let mut fields = merge_fields(definition.fields, overrides);

	let kind = match fields.remove(KIND_KEY) {
		Some(Value::String(requested)) => RecordKind::from_name(&requested).unwrap_or_else(|| {
			tracing::warn!(kind = %requested, "unknown record kind in overrides, keeping the resolved kind");
			kind
		}),
		Some(_) | None => kind,
	};

	Ok(Resolved { fields, kind })
}

/// Merges canonicalized overrides over definition defaults.
///
/// When a field's default and override are both objects the result is their
/// element-wise union, override entries winning per key. Every other
/// combination replaces the default with the override, including a
/// non-object override on an object default.
fn merge_fields(mut defaults: Map<String, Value>, overrides: Map<String, Value>) -> Map<String, Value> {
	for (key, incoming) in overrides {
		let merged = match (defaults.remove(&key), incoming) {
			(Some(Value::Object(mut base)), Value::Object(extra)) => {
				base.extend(extra);
				Value::Object(base)
			}
			(_, incoming) => incoming,
		};
		defaults.insert(key, merged);
	}

	defaults
}
