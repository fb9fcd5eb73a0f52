use std::fmt;
use std::path::PathBuf;

use iconpick_tui::{MessageTable, style};
use serde::Deserialize;
use thiserror::Error;

/// One entry of the `translations` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
	pub msgid: String,
	pub text: String,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub field_id: String,
	pub field_name: String,
	pub value: String,
	pub catalog: Option<PathBuf>,
	pub theme: Option<String>,
	pub translations: Vec<Translation>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		if self.field_id.is_empty() {
			return Err(ConfigError::invalid(
				"field.id",
				self.field_id.clone(),
				source_or_key(&sources.field_id, "field.id"),
				"must not be empty",
			));
		}

		if let Some(theme) = &self.theme
			&& style::by_name(theme).is_none()
		{
			return Err(ConfigError::invalid(
				"ui.theme",
				theme.clone(),
				source_or_key(&sources.theme, "ui.theme"),
				format!("unknown theme; expected one of {}", style::names().join(", ")),
			));
		}

		Ok(())
	}

	/// Translation table for the field's user-facing strings.
	pub fn message_table(&self) -> MessageTable {
		self.translations
			.iter()
			.fold(MessageTable::default(), |table, entry| {
				table.with_entry(entry.msgid.clone(), entry.text.clone())
			})
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Field id: {}", self.field_id);
		println!("  Field name: {}", self.field_name);
		if self.value.is_empty() {
			println!("  Value: (none)");
		} else {
			println!("  Value: {}", self.value);
		}
		match &self.catalog {
			Some(path) => println!("  Catalog: {}", path.display()),
			None => println!("  Catalog: (bundled)"),
		}
		println!("  Theme: {}", self.theme.as_deref().unwrap_or("(default)"));
		println!("  Translations: {}", self.translations.len());
	}
}

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) field_id: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

fn source_or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value:?})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
