//! Pure state records for the icon field.

mod popup;
mod selection;

pub use popup::{Popup, PopupEvent};
pub use selection::{DisplayFields, SelectionState};
