//! Core crate exports for the `iconpick` binary and its embedders.
//!
//! The root module re-exports the field model and the terminal widget so that
//! hosts can mount an icon picker without depending on the member crates
//! directly.

pub mod app_dirs;
pub mod logging;

pub use iconpick_api::{
	CatalogError, FieldChange, FieldDescriptor, HiddenField, IconCatalog, IconOption,
	filter_options,
};
pub use iconpick_tui::{
	FieldOutcome, FieldProps, IconField, MessageTable, PointerHub, Theme, Translate, ValueSink,
	run,
};
