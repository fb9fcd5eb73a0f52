use anyhow::{Context, Result};
use iconpick::{FieldOutcome, FieldProps, IconCatalog, MessageTable, Theme};
use iconpick_tui::style;

use crate::settings::ResolvedConfig;

/// Everything needed to host one icon field, resolved from configuration.
pub struct FieldWorkflow {
	props: FieldProps,
	theme: Theme,
	messages: MessageTable,
}

impl FieldWorkflow {
	/// Build a workflow from resolved settings, loading the icon catalog.
	pub fn from_config(settings: ResolvedConfig) -> Result<Self> {
		let catalog = load_catalog(&settings)?;
		let theme = match &settings.theme {
			Some(name) => style::by_name(name)
				.with_context(|| format!("unknown theme {name:?}"))?,
			None => style::default_theme(),
		};
		let messages = settings.message_table();
		let props = FieldProps::new(
			catalog.field(settings.field_id),
			settings.field_name,
			settings.value,
		);

		Ok(Self {
			props,
			theme,
			messages,
		})
	}

	/// Run the interactive field until the user accepts or cancels.
	pub fn run(self) -> Result<FieldOutcome> {
		iconpick::run(self.props, self.theme, self.messages)
	}
}

/// Load the configured catalog, or the bundled one when none is set.
pub fn load_catalog(settings: &ResolvedConfig) -> Result<IconCatalog> {
	match &settings.catalog {
		Some(path) => IconCatalog::from_path(path)
			.with_context(|| format!("failed to load icon catalog {}", path.display())),
		None => Ok(IconCatalog::builtin().clone()),
	}
}
