//! Lookup of user-facing strings.
//!
//! The field never hardcodes display text: each message id below is passed to
//! a [`Translate`] implementation at render time together with
//! [`TEXT_DOMAIN`].

use std::collections::HashMap;

/// Domain every message of this crate is looked up in.
pub const TEXT_DOMAIN: &str = "iconpick";

pub const NO_ICON_SELECTED: &str = "No icon selected";
pub const SEARCH_PLACEHOLDER: &str = "Search icon ...";
pub const CLEAR: &str = "Clear";
pub const NO_RESULTS: &str = "No results found";

/// Translation function supplied by the host.
pub trait Translate {
	fn translate(&self, message: &str, domain: &str) -> String;
}

/// Returns every message unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
	fn translate(&self, message: &str, _domain: &str) -> String {
		message.to_string()
	}
}

/// A flat message table for [`TEXT_DOMAIN`]; unknown ids fall back to the id.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
	entries: HashMap<String, String>,
}

impl MessageTable {
	#[must_use]
	pub fn with_entry(mut self, message: impl Into<String>, translation: impl Into<String>) -> Self {
		self.entries.insert(message.into(), translation.into());
		self
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Translate for MessageTable {
	fn translate(&self, message: &str, domain: &str) -> String {
		if domain != TEXT_DOMAIN {
			return message.to_string();
		}
		self.entries
			.get(message)
			.cloned()
			.unwrap_or_else(|| message.to_string())
	}
}
