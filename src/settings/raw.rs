use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, Translation};
use crate::cli::CliArgs;

const DEFAULT_FIELD_ID: &str = "icon";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	field: FieldSection,
	catalog: CatalogSection,
	ui: UiSection,
	translations: Vec<Translation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FieldSection {
	id: Option<String>,
	name: Option<String>,
	value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(id) = &cli.id {
			self.field.id = Some(id.clone());
		}
		if let Some(name) = &cli.name {
			self.field.name = Some(name.clone());
		}
		if let Some(value) = &cli.value {
			self.field.value = Some(value.clone());
		}
		if let Some(path) = &cli.catalog {
			self.catalog.path = Some(path.clone());
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			field_id: detect_source(
				cli.id.is_some(),
				self.field.id.is_some(),
				"ICONPICK__FIELD__ID",
				"--id",
				"field.id",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"ICONPICK__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let field_id = self
			.field
			.id
			.map(|id| id.trim().to_string())
			.unwrap_or_else(|| DEFAULT_FIELD_ID.to_string());
		let field_name = self.field.name.unwrap_or_else(|| field_id.clone());

		let config = ResolvedConfig {
			field_id,
			field_name,
			value: self.field.value.unwrap_or_default(),
			catalog: self.catalog.path,
			theme: self.ui.theme,
			translations: self.translations,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
