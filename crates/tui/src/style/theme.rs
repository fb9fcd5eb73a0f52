use std::sync::OnceLock;

use ratatui::style::Style;

use super::loader::parse_theme;

const BUILTIN_THEMES: &[(&str, &str)] = &[
	("default.toml", include_str!("themes/default.toml")),
	("light.toml", include_str!("themes/light.toml")),
];

/// Styles applied to the parts of an icon field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Chosen glyph and label in the preview row.
	pub preview: Style,
	/// Placeholder texts such as "No icon selected".
	pub muted: Style,
	pub search: Style,
	pub search_focused: Style,
	pub button: Style,
	pub button_focused: Style,
	/// Rows of the option list.
	pub option: Style,
	/// The keyboard-highlighted option row.
	pub highlight: Style,
	/// Marker for the option equal to the field's current value.
	pub active: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named theme with optional aliases.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	#[must_use]
	pub fn aliases<I, S>(mut self, aliases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}

	fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

struct Builtins {
	registrations: Vec<ThemeRegistration>,
	default_theme: Theme,
}

fn builtins() -> &'static Builtins {
	static BUILTINS: OnceLock<Builtins> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		let mut registrations = Vec::with_capacity(BUILTIN_THEMES.len());
		let mut default_theme = None;
		for (origin, text) in BUILTIN_THEMES {
			let loaded = parse_theme(text, origin)
				.unwrap_or_else(|error| panic!("failed to load built-in theme: {error:#}"));
			if loaded.is_default && default_theme.is_none() {
				default_theme = Some(loaded.registration.theme);
			}
			registrations.push(loaded.registration);
		}
		let default_theme = default_theme.unwrap_or(registrations[0].theme);
		Builtins {
			registrations,
			default_theme,
		}
	})
}

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins().default_theme
}

/// Every bundled theme, in declaration order.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeRegistration] {
	&builtins().registrations
}

/// Look up a bundled theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtin_themes()
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes().iter().map(|registration| registration.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtins_load_and_default_is_marked_theme() {
		assert_eq!(names(), vec!["default", "light"]);
		assert_eq!(by_name("default"), Some(default_theme()));
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("PAPER"), by_name("light"));
		assert_eq!(by_name(" dark "), Some(default_theme()));
		assert!(by_name("solarized").is_none());
	}
}
