use serde::Serialize;

/// Mirror of a field's current value for native form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
	pub name: String,
	pub id: String,
	pub value: String,
}

impl HiddenField {
	#[must_use]
	pub fn new(name: impl Into<String>, id: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			id: id.into(),
			value: value.into(),
		}
	}

	/// The `name=value` pair a form submission carries.
	#[must_use]
	pub fn form_pair(&self) -> (&str, &str) {
		(&self.name, &self.value)
	}
}

/// A value reported to the host's change callback.
///
/// An empty `value` means "no selection".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
	pub id: String,
	pub value: String,
}

impl FieldChange {
	#[must_use]
	pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			value: value.into(),
		}
	}
}
