use serde::{Deserialize, Serialize};

/// A single icon a field can be set to.
///
/// `contents` is raw glyph markup supplied by the catalog. It is rendered
/// verbatim and never sanitized, so catalogs must come from a trusted source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconOption {
	/// Unique key stored in the form value.
	pub value: String,
	/// Human-readable label.
	pub name: String,
	/// Glyph class identifier, e.g. `dashicons-star-filled`.
	pub class: String,
	/// Raw glyph markup drawn in the option list.
	#[serde(default)]
	pub contents: String,
	/// Extra keywords matched by the search filter.
	#[serde(default)]
	pub search_terms: Vec<String>,
}

impl IconOption {
	/// Create an option with no glyph markup and no extra search terms.
	#[must_use]
	pub fn new(value: impl Into<String>, name: impl Into<String>, class: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			name: name.into(),
			class: class.into(),
			contents: String::new(),
			search_terms: Vec::new(),
		}
	}

	/// Set the raw glyph markup.
	#[must_use]
	pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
		self.contents = contents.into();
		self
	}

	/// Replace the extra search keywords.
	#[must_use]
	pub fn with_search_terms<I, S>(mut self, terms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.search_terms = terms.into_iter().map(Into::into).collect();
		self
	}

	/// Every string the search filter compares against, in declaration order.
	pub fn search_haystack(&self) -> impl Iterator<Item = &str> {
		[self.value.as_str(), self.name.as_str()]
			.into_iter()
			.chain(self.search_terms.iter().map(String::as_str))
	}
}

/// Identity and option set of one icon field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
	pub id: String,
	#[serde(default)]
	pub options: Vec<IconOption>,
}

impl FieldDescriptor {
	#[must_use]
	pub fn new(id: impl Into<String>, options: Vec<IconOption>) -> Self {
		Self {
			id: id.into(),
			options,
		}
	}

	/// First option (in declared order) whose value equals `value`.
	#[must_use]
	pub fn find(&self, value: &str) -> Option<&IconOption> {
		find_option(&self.options, value)
	}
}

/// First option in `options` whose value equals `value`.
#[must_use]
pub fn find_option<'a>(options: &'a [IconOption], value: &str) -> Option<&'a IconOption> {
	options.iter().find(|option| option.value == value)
}
