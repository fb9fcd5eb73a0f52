use iconpick_api::FieldChange;

/// Receiver of confirmed field values: the host's change callback.
///
/// Called once per picked option with its value, and once per clear with an
/// empty value.
pub trait ValueSink {
	fn change(&mut self, id: &str, value: &str);
}

impl<F> ValueSink for F
where
	F: FnMut(&str, &str),
{
	fn change(&mut self, id: &str, value: &str) {
		self(id, value);
	}
}

/// A sink that records every change, for hosts that apply values later.
#[derive(Debug, Default, Clone)]
pub struct ChangeLog {
	changes: Vec<FieldChange>,
}

impl ChangeLog {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the recorded changes, leaving the log empty.
	pub fn drain(&mut self) -> Vec<FieldChange> {
		std::mem::take(&mut self.changes)
	}
}

impl ValueSink for ChangeLog {
	fn change(&mut self, id: &str, value: &str) {
		self.changes.push(FieldChange::new(id, value));
	}
}
