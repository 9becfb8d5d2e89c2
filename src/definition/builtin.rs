//! Built-in factory definitions.
//!
//! The built-in layer is searched after every registered directory, so a
//! definition file with the same name in a registered directory shadows the
//! built-in one. Generated values (timestamps, random titles) are produced
//! fresh each time a definition is materialized.

use fake::Fake;
use serde_json::{Map, Value, json};

use super::format::Definition;

/// Returns the built-in definition for `name`, if one exists.
pub fn definition(name: &str) -> Option<Definition> {
	match name {
		"page" => Some(page()),
		"term" => Some(term()),
		_ => None,
	}
}

/// The built-in page definition.
///
/// This is also the fallback used for factory names with no definition
/// anywhere; the resolver then rewrites `post_type` to the requested name.
pub fn page() -> Definition {
	let now = timestamp();
	let mut fields = Map::new();

	fields.insert("comment_count".to_string(), json!(""));
	fields.insert("comment_status".to_string(), json!(""));
	fields.insert("ID".to_string(), json!(0));
	fields.insert("meta_input".to_string(), json!({}));
	fields.insert("menu_order".to_string(), json!(0));
	fields.insert("ping_status".to_string(), json!(""));
	fields.insert("post_author".to_string(), json!(""));
	fields.insert("post_content".to_string(), json!(""));
	fields.insert("post_date".to_string(), json!(now));
	fields.insert("post_date_gmt".to_string(), json!(now));
	fields.insert("post_excerpt".to_string(), json!(""));
	fields.insert("post_modified".to_string(), json!(now));
	fields.insert("post_modified_gmt".to_string(), json!(now));
	fields.insert("post_name".to_string(), json!(""));
	fields.insert("post_parent".to_string(), json!(0));
	fields.insert("post_password".to_string(), json!(""));
	fields.insert("post_status".to_string(), json!("publish"));
	fields.insert("post_title".to_string(), Value::String(random_string()));
	fields.insert("post_type".to_string(), json!("page"));
	fields.insert("tax_input".to_string(), json!({}));

	Definition::new(fields).with_kind("post")
}

/// The built-in term definition.
pub fn term() -> Definition {
	let mut fields = Map::new();

	fields.insert("ID".to_string(), json!(0));
	fields.insert("count".to_string(), json!(0));
	fields.insert("description".to_string(), json!(""));
	fields.insert("name".to_string(), Value::String(random_string()));
	fields.insert("parent".to_string(), json!(0));
	fields.insert("slug".to_string(), json!(""));
	fields.insert("taxonomy".to_string(), json!("category"));
	fields.insert("term_group".to_string(), json!(0));
	fields.insert("term_id".to_string(), json!(0));
	fields.insert("term_taxonomy_id".to_string(), json!(0));

	Definition::new(fields).with_kind("term")
}

/// Current local time in the content store's datetime format.
fn timestamp() -> String {
	chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Random default for fields that must differ between generated records.
fn random_string() -> String {
	(8..16).fake()
}
