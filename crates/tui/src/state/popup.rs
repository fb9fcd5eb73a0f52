/// Visual state of the option popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Popup {
	#[default]
	Closed,
	Open,
}

/// Inputs that can move the popup between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
	/// The search input gained focus.
	Focus,
	/// An explicit request to open, which also focuses the search input.
	OpenRequest,
	/// A pointer went down somewhere in the frame.
	PointerDown { inside: bool },
	/// An option was picked.
	Picked,
	/// The clear action fired.
	Cleared,
}

impl Popup {
	/// Apply `event` and return the next state.
	///
	/// Losing focus is not an event: only a pointer-down outside the popup, a
	/// pick, or a clear closes it.
	#[must_use]
	pub fn on(self, event: PopupEvent) -> Self {
		match event {
			PopupEvent::Focus | PopupEvent::OpenRequest => Self::Open,
			PopupEvent::PointerDown { inside: true } => self,
			PopupEvent::PointerDown { inside: false } | PopupEvent::Picked | PopupEvent::Cleared => {
				Self::Closed
			}
		}
	}

	#[must_use]
	pub fn is_open(self) -> bool {
		self == Self::Open
	}
}
