//! The searchable icon picker field.
//!
//! [`IconField`] owns a [`SelectionState`] and a [`Popup`], and drives them
//! from three sources: keyboard input, mouse input on its own elements, and
//! frame-wide pointer-downs delivered through a [`PointerHub`]. Mounting
//! subscribes to the hub; dropping the field (unmount) releases it.

mod actions;
mod render;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use iconpick_api::{FieldDescriptor, HiddenField, IconOption};
use ratatui::layout::Rect;

use crate::i18n::{SEARCH_PLACEHOLDER, TEXT_DOMAIN, Translate, Untranslated};
use crate::input::SearchInput;
use crate::pointer::{PointerHub, Subscription};
use crate::sink::ValueSink;
use crate::state::{Popup, PopupEvent, SelectionState};

pub use render::{OptionList, render_options};

/// Everything the host supplies to an icon field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldProps {
	/// Field id and the options it offers.
	pub field: FieldDescriptor,
	/// Name of the hidden form input mirroring the value.
	pub name: String,
	/// Current value as known by the host.
	pub value: String,
}

impl FieldProps {
	#[must_use]
	pub fn new(field: FieldDescriptor, name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			field,
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Which element of the field receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	None,
	Search,
	Clear,
}

/// Screen areas recorded by the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldLayout {
	pub(crate) search: Rect,
	pub(crate) clear: Rect,
	pub(crate) options: Rect,
	pub(crate) option_rows: Vec<(Rect, usize)>,
}

/// A mounted icon picker.
pub struct IconField {
	props: FieldProps,
	selection: SelectionState,
	popup: Rc<Cell<Popup>>,
	popup_area: Rc<Cell<Rect>>,
	input: SearchInput<'static>,
	focus: Focus,
	highlighted: Option<usize>,
	layout: FieldLayout,
	sink: Box<dyn ValueSink>,
	translator: Box<dyn Translate>,
	_outside_click: Subscription,
}

impl IconField {
	/// Mount a field: derive display state from `props.value` and start
	/// listening for pointer-downs outside the popup.
	pub fn mount(props: FieldProps, sink: impl ValueSink + 'static, hub: &PointerHub) -> Self {
		let selection = SelectionState::mount(&props.field.options, &props.value);
		let popup = Rc::new(Cell::new(Popup::default()));
		let popup_area = Rc::new(Cell::new(Rect::default()));
		let outside_click = subscribe_outside_click(hub, &popup, &popup_area, &props.field.id);
		let input = SearchInput::new(selection.search_term.clone(), SEARCH_PLACEHOLDER);

		tracing::debug!(
			target: "iconpick_tui::field",
			id = %props.field.id,
			value = %props.value,
			options = props.field.options.len(),
			"icon field mounted"
		);

		let highlighted = first_index(&selection.available);
		Self {
			props,
			selection,
			popup,
			popup_area,
			input,
			focus: Focus::None,
			highlighted,
			layout: FieldLayout::default(),
			sink: Box::new(sink),
			translator: Box::new(Untranslated),
			_outside_click: outside_click,
		}
	}

	/// Use `translator` for every user-facing string.
	#[must_use]
	pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
		self.translator = Box::new(translator);
		let placeholder = self.translate(SEARCH_PLACEHOLDER);
		self.input.set_placeholder(placeholder);
		self
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.props.field.id
	}

	#[must_use]
	pub fn props(&self) -> &FieldProps {
		&self.props
	}

	/// The host's current value.
	#[must_use]
	pub fn value(&self) -> &str {
		&self.props.value
	}

	#[must_use]
	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	#[must_use]
	pub fn chosen(&self) -> Option<&IconOption> {
		self.selection.chosen.as_ref()
	}

	#[must_use]
	pub fn search_term(&self) -> &str {
		&self.selection.search_term
	}

	#[must_use]
	pub fn available(&self) -> &[IconOption] {
		&self.selection.available
	}

	#[must_use]
	pub fn popup(&self) -> Popup {
		self.popup.get()
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.popup.get().is_open()
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Index into [`available`](Self::available) of the highlighted option.
	#[must_use]
	pub fn highlighted(&self) -> Option<usize> {
		self.highlighted
	}

	/// Bounding area of the popup as of the last draw.
	#[must_use]
	pub fn popup_area(&self) -> Rect {
		self.popup_area.get()
	}

	/// Mirror of the host value for form submission.
	#[must_use]
	pub fn hidden_field(&self) -> HiddenField {
		HiddenField::new(&self.props.name, &self.props.field.id, &self.props.value)
	}

	/// Accept a new value from the host.
	///
	/// This only updates the mirrored value and the active marker; the chosen
	/// icon is derived on mount and on confirmed picks.
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.props.value = value.into();
	}

	/// The search input received focus.
	pub fn focus_input(&mut self) {
		self.set_focus(Focus::Search);
		self.transition(PopupEvent::Focus);
	}

	/// Open the popup on request and move keyboard focus into the search box.
	pub fn open_list(&mut self) {
		self.transition(PopupEvent::OpenRequest);
		self.set_focus(Focus::Search);
	}

	/// Move keyboard focus to the clear button. The popup stays as it is.
	pub fn focus_clear(&mut self) {
		self.set_focus(Focus::Clear);
	}

	/// A new search term was typed.
	pub fn search(&mut self, term: impl Into<String>) {
		let selection = std::mem::take(&mut self.selection);
		self.selection = selection.search(&self.props.field.options, term);
		if self.input.text() != self.selection.search_term {
			self.input.set_text(self.selection.search_term.clone());
		}
		self.highlighted = first_index(&self.selection.available);
	}

	/// Pick the option at `index` in the visible list.
	///
	/// Returns `false` when `index` is out of range.
	pub fn pick(&mut self, index: usize) -> bool {
		let Some(option) = self.selection.available.get(index).cloned() else {
			return false;
		};
		self.select_option(&option);
		true
	}

	/// Confirm `option`: notify the host, re-derive the display fields from
	/// its value, and close the popup.
	pub fn select_option(&mut self, option: &IconOption) {
		self.sink.change(&self.props.field.id, &option.value);

		let selection = std::mem::take(&mut self.selection);
		self.selection = selection.apply_value(&self.props.field.options, &option.value);
		self.input.set_text(self.selection.search_term.clone());
		self.transition(PopupEvent::Picked);

		tracing::debug!(
			target: "iconpick_tui::field",
			id = %self.props.field.id,
			value = %option.value,
			"icon selected"
		);
	}

	/// Drop the selection and report an empty value to the host.
	pub fn clear(&mut self) {
		let selection = std::mem::take(&mut self.selection);
		self.selection = selection.clear();
		self.input.set_text(String::new());
		self.sink.change(&self.props.field.id, "");
		self.transition(PopupEvent::Cleared);

		tracing::debug!(target: "iconpick_tui::field", id = %self.props.field.id, "icon cleared");
	}

	/// Move the highlight by `delta` rows, clamped to the visible list.
	pub fn move_highlight(&mut self, delta: isize) {
		let len = self.selection.available.len();
		if len == 0 {
			self.highlighted = None;
			return;
		}
		let current = self.highlighted.unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(len - 1);
		self.highlighted = Some(next);
	}

	fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.input.set_focused(focus == Focus::Search);
	}

	fn transition(&mut self, event: PopupEvent) {
		let current = self.popup.get();
		let next = current.on(event);
		if next != current {
			tracing::trace!(target: "iconpick_tui::field", ?event, ?next, "popup transition");
		}
		self.popup.set(next);
	}

	fn translate(&self, message: &str) -> String {
		self.translator.translate(message, TEXT_DOMAIN)
	}
}

impl fmt::Debug for IconField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IconField")
			.field("props", &self.props)
			.field("selection", &self.selection)
			.field("popup", &self.popup.get())
			.field("focus", &self.focus)
			.field("highlighted", &self.highlighted)
			.finish_non_exhaustive()
	}
}

impl Drop for IconField {
	fn drop(&mut self) {
		tracing::debug!(target: "iconpick_tui::field", id = %self.props.field.id, "icon field unmounted");
	}
}

fn first_index(options: &[IconOption]) -> Option<usize> {
	(!options.is_empty()).then_some(0)
}

fn subscribe_outside_click(
	hub: &PointerHub,
	popup: &Rc<Cell<Popup>>,
	popup_area: &Rc<Cell<Rect>>,
	id: &str,
) -> Subscription {
	let popup = Rc::clone(popup);
	let popup_area = Rc::clone(popup_area);
	let id = id.to_string();
	hub.subscribe(move |event| {
		let inside = event.is_within(popup_area.get());
		let current = popup.get();
		let next = current.on(PopupEvent::PointerDown { inside });
		if next != current {
			tracing::trace!(target: "iconpick_tui::field", id = %id, "closed by outside pointer-down");
		}
		popup.set(next);
	})
}

#[cfg(test)]
mod tests;
