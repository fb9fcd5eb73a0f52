//! Single-line search box built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Text input for the icon search term.
///
/// Keys that would break the single line (Enter, Tab, vertical movement) are
/// refused so the owning widget can use them for navigation.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	focused: bool,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(text: impl Into<String>, placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder,
			focused: false,
		};
		input.set_text(text);
		input
	}

	/// Current contents of the box.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Replace the contents, leaving the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		let mut textarea = TextArea::new(vec![text]);
		textarea.set_placeholder_text(self.placeholder.clone());
		textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_cursor_style();
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
		self.textarea.set_placeholder_text(self.placeholder.clone());
	}

	#[must_use]
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor_style();
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if !accepts(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}
}

fn accepts(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter
		| KeyCode::Tab
		| KeyCode::BackTab
		| KeyCode::Up
		| KeyCode::Down
		| KeyCode::PageUp
		| KeyCode::PageDown
		| KeyCode::Esc => false,
		KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
		_ => true,
	}
}
