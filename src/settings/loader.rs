use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Layer config files and `ICONPICK__*` variables, apply CLI flags on top,
/// and validate the result.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("failed to deserialize iconpick configuration")?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	tracing::debug!(
		field_id = %resolved.field_id,
		catalog = ?resolved.catalog,
		theme = ?resolved.theme,
		"configuration resolved"
	);
	Ok(resolved)
}
