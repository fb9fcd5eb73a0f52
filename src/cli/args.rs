use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use iconpick::app_dirs;

/// Produce the full version banner including config and cache directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let cache_dir = match app_dirs::get_cache_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("iconpick {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "cache directory: {cache_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "iconpick",
	version,
	long_version = long_version(),
	about = "Pick an icon for a form field from a searchable list",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `iconpick` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ICONPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'C',
		long,
		value_name = "FILE",
		help = "Load icon options from a JSON or TOML catalog (default: bundled dashicons)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		long,
		value_name = "ID",
		help = "Field id reported with every change (default: icon)"
	)]
	pub(crate) id: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Name of the hidden form input (default: field id)"
	)]
	pub(crate) name: Option<String>,
	#[arg(
		short = 'v',
		long,
		value_name = "VALUE",
		help = "Initial field value (default: empty)"
	)]
	pub(crate) value: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-icons",
		value_name = "TERM",
		num_args = 0..=1,
		default_missing_value = "",
		help = "Print the options matching TERM and exit (default: disabled)"
	)]
	pub(crate) list_icons: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to FILE (default: iconpick.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn command_supports_custom_styles() {
		let command = cli_command();
		assert!(command.get_about().is_some());
		command.debug_assert();
	}

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let mut matches = cli_command().get_matches_from(vec!["iconpick"]);
		let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.list_icons.is_none());
	}

	#[test]
	fn list_icons_term_is_optional() {
		let parsed = CliArgs::parse_from(["iconpick", "--list-icons"]);
		assert_eq!(parsed.list_icons.as_deref(), Some(""));

		let parsed = CliArgs::parse_from(["iconpick", "--list-icons", "fav", "-o", "json"]);
		assert_eq!(parsed.list_icons.as_deref(), Some("fav"));
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
