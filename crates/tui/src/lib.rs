//! Terminal rendition of the searchable icon picker.
//!
//! The crate contains the [`IconField`] component with its pure state
//! records, the frame-wide [`PointerHub`] used for outside-click detection,
//! themes, translation hooks, and a small runtime that hosts one field in a
//! full-screen terminal session.

pub mod field;
pub mod i18n;
pub mod input;
pub mod pointer;
mod runtime;
pub mod sink;
pub mod state;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use field::{FieldProps, Focus, IconField, OptionList, render_options};
pub use i18n::{MessageTable, TEXT_DOMAIN, Translate, Untranslated};
pub use input::SearchInput;
pub use pointer::{PointerDown, PointerHub, Subscription};
pub use runtime::{FieldOutcome, run};
pub use sink::{ChangeLog, ValueSink};
pub use state::{DisplayFields, Popup, PopupEvent, SelectionState};
pub use style::{Theme, builtin_themes, default_theme};
