//! Record kind definitions.

/// The kinds of record a factory can instantiate.
///
/// A definition names its kind with the reserved `"kind"` key; the resolver
/// turns that string into a variant once, before instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RecordKind {
	/// Post-like content (posts, pages, custom post types). The default.
	#[default]
	Post,

	/// Taxonomy terms.
	Term,
}

impl RecordKind {
	/// Parses a kind name from a definition's `"kind"` value.
	///
	/// # Example
	///
	/// ```
	/// # use faktory::RecordKind;
	/// assert_eq!(RecordKind::from_name("post"), Some(RecordKind::Post));
	/// assert_eq!(RecordKind::from_name("Page"), Some(RecordKind::Post));
	/// assert_eq!(RecordKind::from_name("term"), Some(RecordKind::Term));
	/// assert_eq!(RecordKind::from_name("widget"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Self> {
		match name.to_lowercase().as_str() {
			"post" | "page" | "record" => Some(Self::Post),
			"term" => Some(Self::Term),
			_ => None,
		}
	}

	/// Returns the canonical name for this kind.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Post => "post",
			Self::Term => "term",
		}
	}
}

impl std::fmt::Display for RecordKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
