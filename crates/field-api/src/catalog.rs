//! Loading icon option sets from JSON or TOML files.
//!
//! A catalog file is either a bare JSON array of options or a document with an
//! `options` list (`[[options]]` tables in TOML).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::filter::filter_options;
use crate::option::{FieldDescriptor, IconOption, find_option};

const BUILTIN_CATALOG: &str = include_str!("../catalogs/dashicons.json");

/// Errors raised while reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read icon catalog {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid JSON icon catalog {path}")]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("invalid TOML icon catalog {path}")]
	Toml {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
	#[error("unsupported icon catalog format for {path} (expected .json or .toml)")]
	UnsupportedFormat { path: PathBuf },
}

/// Serialization formats understood by [`IconCatalog::from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
	Json,
	Toml,
}

impl CatalogFormat {
	/// Guess the format from a file extension.
	#[must_use]
	pub fn from_path(path: &Path) -> Option<Self> {
		let extension = path.extension()?.to_str()?.to_ascii_lowercase();
		match extension.as_str() {
			"json" => Some(Self::Json),
			"toml" => Some(Self::Toml),
			_ => None,
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
	List(Vec<IconOption>),
	Table { options: Vec<IconOption> },
}

impl CatalogDocument {
	fn into_options(self) -> Vec<IconOption> {
		match self {
			Self::List(options) | Self::Table { options } => options,
		}
	}
}

/// An ordered, immutable set of icon options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCatalog {
	options: Vec<IconOption>,
}

impl IconCatalog {
	#[must_use]
	pub fn new(options: Vec<IconOption>) -> Self {
		warn_on_duplicates(&options);
		Self { options }
	}

	/// The catalog bundled with the crate.
	#[must_use]
	pub fn builtin() -> &'static Self {
		static BUILTIN: OnceLock<IconCatalog> = OnceLock::new();
		BUILTIN.get_or_init(|| {
			Self::parse(BUILTIN_CATALOG, CatalogFormat::Json, Path::new("<builtin>"))
				.unwrap_or_else(|error| panic!("failed to load built-in icon catalog: {error}"))
		})
	}

	/// Load a catalog, choosing the parser from the file extension.
	///
	/// # Errors
	///
	/// Returns [`CatalogError`] when the file cannot be read, has an unknown
	/// extension, or does not deserialize into a list of options.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let path = path.as_ref();
		let format = CatalogFormat::from_path(path).ok_or_else(|| {
			CatalogError::UnsupportedFormat {
				path: path.to_path_buf(),
			}
		})?;
		let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::parse(&text, format, path)?;
		tracing::debug!(
			target: "iconpick_api::catalog",
			path = %path.display(),
			count = catalog.len(),
			"loaded icon catalog"
		);
		Ok(catalog)
	}

	/// Parse catalog text in the given format. `origin` only labels errors.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Json`] or [`CatalogError::Toml`] when the text
	/// is malformed.
	pub fn parse(text: &str, format: CatalogFormat, origin: &Path) -> Result<Self, CatalogError> {
		let document: CatalogDocument = match format {
			CatalogFormat::Json => serde_json::from_str(text).map_err(|source| CatalogError::Json {
				path: origin.to_path_buf(),
				source,
			})?,
			CatalogFormat::Toml => toml::from_str(text).map_err(|source| CatalogError::Toml {
				path: origin.to_path_buf(),
				source,
			})?,
		};
		Ok(Self::new(document.into_options()))
	}

	#[must_use]
	pub fn options(&self) -> &[IconOption] {
		&self.options
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.options.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	#[must_use]
	pub fn find(&self, value: &str) -> Option<&IconOption> {
		find_option(&self.options, value)
	}

	/// Options matching `term`, see [`filter_options`].
	#[must_use]
	pub fn search(&self, term: &str) -> Vec<IconOption> {
		filter_options(&self.options, term)
	}

	/// Build a field descriptor that offers every option in this catalog.
	#[must_use]
	pub fn field(&self, id: impl Into<String>) -> FieldDescriptor {
		FieldDescriptor::new(id, self.options.clone())
	}

	#[must_use]
	pub fn into_options(self) -> Vec<IconOption> {
		self.options
	}
}

fn warn_on_duplicates(options: &[IconOption]) {
	let mut seen = HashSet::new();
	for option in options {
		if !seen.insert(option.value.as_str()) {
			tracing::warn!(
				target: "iconpick_api::catalog",
				value = %option.value,
				"duplicate icon value; lookups resolve to the first declaration"
			);
		}
	}
}
