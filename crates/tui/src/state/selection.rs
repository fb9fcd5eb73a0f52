//! Which icon is chosen, what the search box shows, and which options are
//! listed.
//!
//! Every transition consumes the old state and returns the new one so the
//! field can be driven (and tested) without a terminal.

use iconpick_api::{IconOption, filter_options};
use iconpick_api::option::find_option;

/// Display fields derived from a form value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFields {
	pub chosen: Option<IconOption>,
	pub icon_class: String,
	pub search_term: String,
}

impl DisplayFields {
	/// Resolve `value` against `options`.
	///
	/// The first option with an equal value wins. A missing option, or one
	/// whose value is the empty string, yields the empty selection.
	#[must_use]
	pub fn resolve(options: &[IconOption], value: &str) -> Self {
		match find_option(options, value) {
			Some(option) if !option.value.is_empty() => Self {
				chosen: Some(option.clone()),
				icon_class: option.class.clone(),
				search_term: option.value.clone(),
			},
			_ => Self::default(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.chosen.is_none()
	}
}

/// Local selection and search state of one icon field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
	/// Raw text in the search box, echoed exactly as typed.
	pub search_term: String,
	pub chosen: Option<IconOption>,
	pub icon_class: String,
	/// Options currently listed in the popup.
	pub available: Vec<IconOption>,
}

impl SelectionState {
	/// Initial state for a freshly mounted field.
	///
	/// Every option is listed regardless of `value`; the value only decides
	/// the chosen icon and the initial search text.
	#[must_use]
	pub fn mount(options: &[IconOption], value: &str) -> Self {
		Self {
			available: options.to_vec(),
			..Self::default()
		}
		.apply_value(options, value)
	}

	/// Re-derive the chosen icon, class and search text from `value`.
	#[must_use]
	pub fn apply_value(self, options: &[IconOption], value: &str) -> Self {
		self.with_display(DisplayFields::resolve(options, value))
	}

	/// Refilter the list for a new search term and store the term verbatim.
	///
	/// The chosen icon is left alone until the next pick or clear.
	#[must_use]
	pub fn search(self, options: &[IconOption], term: impl Into<String>) -> Self {
		let search_term = term.into();
		Self {
			available: filter_options(options, &search_term),
			search_term,
			..self
		}
	}

	/// Drop the selection and empty the search text.
	#[must_use]
	pub fn clear(self) -> Self {
		self.with_display(DisplayFields::default())
	}

	#[must_use]
	pub fn display(&self) -> DisplayFields {
		DisplayFields {
			chosen: self.chosen.clone(),
			icon_class: self.icon_class.clone(),
			search_term: self.search_term.clone(),
		}
	}

	fn with_display(self, display: DisplayFields) -> Self {
		let DisplayFields {
			chosen,
			icon_class,
			search_term,
		} = display;
		Self {
			search_term,
			chosen,
			icon_class,
			..self
		}
	}
}
