//! Frame-wide pointer-down notifications.
//!
//! A [`PointerHub`] plays the role of a document-level mouse listener: the
//! runtime dispatches every mouse-down to it before any widget hit-testing.
//! Widgets subscribe while mounted and hold the returned [`Subscription`];
//! dropping the guard unregisters the listener, so nothing outlives its owner.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
	/// Key of a registered pointer listener.
	pub struct ListenerId;
}

type Listener = Rc<dyn Fn(&PointerDown)>;
type Listeners = RefCell<SlotMap<ListenerId, Listener>>;

/// A mouse button went down at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
	pub column: u16,
	pub row: u16,
}

impl PointerDown {
	#[must_use]
	pub fn new(column: u16, row: u16) -> Self {
		Self { column, row }
	}

	/// Convert a crossterm mouse event, keeping only button presses.
	#[must_use]
	pub fn from_mouse(mouse: &MouseEvent) -> Option<Self> {
		match mouse.kind {
			MouseEventKind::Down(_) => Some(Self::new(mouse.column, mouse.row)),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_within(self, area: Rect) -> bool {
		point_in_rect(self.column, self.row, area)
	}
}

/// Whether the cell at `column`/`row` lies inside `area`. Empty areas contain
/// nothing.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Registry of pointer-down listeners shared by everything in one frame.
///
/// Cloning the hub yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct PointerHub {
	listeners: Rc<Listeners>,
}

impl PointerHub {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `listener` until the returned guard is dropped.
	#[must_use = "dropping the subscription unregisters the listener immediately"]
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&PointerDown) + 'static,
	{
		let id = self.listeners.borrow_mut().insert(Rc::new(listener));
		tracing::trace!(target: "iconpick_tui::pointer", ?id, "pointer listener registered");
		Subscription {
			listeners: Rc::downgrade(&self.listeners),
			id,
		}
	}

	/// Deliver `event` to every registered listener and return how many ran.
	///
	/// Listeners may subscribe or unsubscribe while being notified; changes
	/// take effect from the next dispatch.
	pub fn dispatch(&self, event: PointerDown) -> usize {
		let listeners: Vec<Listener> = self.listeners.borrow().values().cloned().collect();
		for listener in &listeners {
			listener(&event);
		}
		listeners.len()
	}

	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}
}

impl fmt::Debug for PointerHub {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PointerHub")
			.field("listeners", &self.listener_count())
			.finish()
	}
}

/// Guard for a registered listener; unregisters on drop.
pub struct Subscription {
	listeners: Weak<Listeners>,
	id: ListenerId,
}

impl Subscription {
	/// Whether the listener is still registered with a live hub.
	#[must_use]
	pub fn is_active(&self) -> bool {
		self.listeners
			.upgrade()
			.is_some_and(|listeners| listeners.borrow().contains_key(self.id))
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(listeners) = self.listeners.upgrade() {
			listeners.borrow_mut().remove(self.id);
			tracing::trace!(target: "iconpick_tui::pointer", id = ?self.id, "pointer listener released");
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use ratatui::crossterm::event::{KeyModifiers, MouseButton};

	use super::*;

	#[test]
	fn dispatch_reaches_subscribers() {
		let hub = PointerHub::new();
		let hits = Rc::new(Cell::new(0));
		let counter = Rc::clone(&hits);
		let _subscription = hub.subscribe(move |_| counter.set(counter.get() + 1));

		assert_eq!(hub.dispatch(PointerDown::new(1, 1)), 1);
		hub.dispatch(PointerDown::new(2, 2));
		assert_eq!(hits.get(), 2);
	}

	#[test]
	fn dropping_subscription_unregisters() {
		let hub = PointerHub::new();
		let hits = Rc::new(Cell::new(0));
		let counter = Rc::clone(&hits);
		let subscription = hub.subscribe(move |_| counter.set(counter.get() + 1));
		assert!(subscription.is_active());
		assert_eq!(hub.listener_count(), 1);

		drop(subscription);
		assert_eq!(hub.listener_count(), 0);
		assert_eq!(hub.dispatch(PointerDown::new(0, 0)), 0);
		assert_eq!(hits.get(), 0);
	}

	#[test]
	fn subscription_outliving_hub_is_inert() {
		let hub = PointerHub::new();
		let subscription = hub.subscribe(|_| {});
		drop(hub);
		assert!(!subscription.is_active());
		drop(subscription);
	}

	#[test]
	fn listener_may_unsubscribe_during_dispatch() {
		let hub = PointerHub::new();
		let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
		let inner = Rc::clone(&slot);
		let subscription = hub.subscribe(move |_| {
			inner.borrow_mut().take();
		});
		*slot.borrow_mut() = Some(subscription);

		hub.dispatch(PointerDown::new(0, 0));
		assert_eq!(hub.listener_count(), 0);
	}

	#[test]
	fn only_button_presses_become_pointer_downs() {
		let press = MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: 4,
			row: 2,
			modifiers: KeyModifiers::NONE,
		};
		assert_eq!(PointerDown::from_mouse(&press), Some(PointerDown::new(4, 2)));

		let release = MouseEvent {
			kind: MouseEventKind::Up(MouseButton::Left),
			..press
		};
		assert_eq!(PointerDown::from_mouse(&release), None);
	}

	#[test]
	fn containment_excludes_edges_and_empty_areas() {
		let area = Rect::new(2, 3, 4, 2);
		assert!(PointerDown::new(2, 3).is_within(area));
		assert!(PointerDown::new(5, 4).is_within(area));
		assert!(!PointerDown::new(6, 4).is_within(area));
		assert!(!PointerDown::new(5, 5).is_within(area));
		assert!(!PointerDown::new(0, 0).is_within(Rect::default()));
	}
}
