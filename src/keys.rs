//! Shorthand field-name translation.
//!
//! Override arguments may use short field names (`title`, `status`, …);
//! the content store expects the canonical prefixed names (`post_title`,
//! `post_status`, …). Each record kind carries a fixed shorthand map, and
//! [`canonicalize`] rewrites an override mapping against it.

use serde_json::{Map, Value};

use crate::record::RecordKind;

/// Shorthand aliases accepted for post-like records.
const POST_KEYS: &[(&str, &str)] = &[
	("author", "post_author"),
	("name", "post_name"),
	("type", "post_type"),
	("title", "post_title"),
	("date", "post_date"),
	("date_gmt", "post_date_gmt"),
	("content", "post_content"),
	("excerpt", "post_excerpt"),
	("status", "post_status"),
	("password", "post_password"),
	("parent", "post_parent"),
	("modified", "post_modified"),
	("modified_gmt", "post_modified_gmt"),
	("meta", "meta_input"),
];

/// Returns the shorthand map for a record kind.
///
/// Term fields have no prefixed canonical form, so the term map is empty
/// and every term override key passes through unchanged.
pub fn shorthand_map(kind: RecordKind) -> &'static [(&'static str, &'static str)] {
	match kind {
		RecordKind::Post => POST_KEYS,
		RecordKind::Term => &[],
	}
}

/// Translates a shorthand key to its canonical key for a record kind.
pub fn canonical_key(kind: RecordKind, key: &str) -> Option<&'static str> {
	shorthand_map(kind)
		.iter()
		.find(|(shorthand, _)| *shorthand == key)
		.map(|(_, canonical)| *canonical)
}

/// Rewrites an override mapping so every shorthand key appears under its
/// canonical name instead.
///
/// Values are untouched, keys with no shorthand entry pass through, and the
/// shorthand key itself is dropped. When a mapping holds both a shorthand
/// key and its canonical key, the one iterated later wins.
pub fn canonicalize(kind: RecordKind, overrides: Map<String, Value>) -> Map<String, Value> {
	let mut canonical = Map::with_capacity(overrides.len());

	for (key, value) in overrides {
		match canonical_key(kind, &key) {
			Some(full) => canonical.insert(full.to_string(), value),
			None => canonical.insert(key, value),
		};
	}

	canonical
}
