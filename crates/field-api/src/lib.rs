//! Data types shared by the `iconpick` widget and its hosts.
//!
//! Options describe the icons a field can choose from, catalogs load them from
//! disk, and [`filter_options`] derives the visible suggestion list for a
//! search term.

pub mod catalog;
pub mod filter;
pub mod form;
pub mod option;

pub use catalog::{CatalogError, CatalogFormat, IconCatalog};
pub use filter::{filter_options, matches_term};
pub use form::{FieldChange, HiddenField};
pub use option::{FieldDescriptor, IconOption};
