//! Visual styling for the icon field.
//!
//! Themes are TOML documents bundled with the crate; each maps the parts of
//! the widget to a ratatui [`Style`](ratatui::style::Style).

mod loader;
mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
