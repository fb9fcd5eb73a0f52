mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_options, print_plain};
use iconpick::{app_dirs, logging};
use iconpick_tui::style;
use settings::ResolvedConfig;
use workflow::{FieldWorkflow, load_catalog};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Some(term) = &cli.list_icons {
		let catalog = load_catalog(&resolved)?;
		return print_options(&catalog.search(term), cli.output == OutputFormat::Json);
	}

	let log_file = match cli.log_file.clone() {
		Some(path) => path,
		None => app_dirs::default_log_file()?,
	};
	logging::initialize(&log_file)?;

	run_field(cli.output, resolved)
}

/// Run the interactive field and print its outcome in the chosen format.
fn run_field(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = FieldWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
