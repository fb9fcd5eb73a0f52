//! Log output for the terminal binary.
//!
//! The alternate screen owns stdout and stderr while a field is running, so
//! events go to a file instead. Filtering follows the `ICONPICK_LOG`
//! environment variable (`EnvFilter` syntax) and defaults to `warn`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "ICONPICK_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the global subscriber, appending to `path`.
///
/// Calling this more than once keeps the first subscriber.
pub fn initialize(path: &Path) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let installed = tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.is_ok();
	if installed {
		tracing::debug!(log_file = %path.display(), "logging initialised");
	}
	Ok(())
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
