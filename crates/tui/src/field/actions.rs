use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use super::{Focus, IconField};
use crate::pointer::point_in_rect;

impl IconField {
	/// Process a key press. Returns `false` when the field has no use for it,
	/// leaving it to the host (e.g. Enter on a closed popup, Esc).
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key.kind != KeyEventKind::Press {
			return false;
		}

		match (self.focus, key.code) {
			(_, KeyCode::Tab) => {
				self.cycle_focus(true);
				true
			}
			(_, KeyCode::BackTab) => {
				self.cycle_focus(false);
				true
			}
			(Focus::Clear, KeyCode::Enter | KeyCode::Char(' ')) => {
				self.clear();
				true
			}
			(Focus::Search, KeyCode::Down) => {
				if self.is_open() {
					self.move_highlight(1);
				} else {
					self.open_list();
				}
				true
			}
			(Focus::Search, KeyCode::Up) if self.is_open() => {
				self.move_highlight(-1);
				true
			}
			(Focus::Search, KeyCode::PageDown) if self.is_open() => {
				self.move_highlight(self.page_size());
				true
			}
			(Focus::Search, KeyCode::PageUp) if self.is_open() => {
				self.move_highlight(-self.page_size());
				true
			}
			// An open popup owns Enter even when nothing matches.
			(Focus::Search, KeyCode::Enter) if self.is_open() => {
				if let Some(index) = self.highlighted {
					self.pick(index);
				}
				true
			}
			(Focus::Search, _) => {
				if self.input.input(key) {
					let term = self.input.text().to_string();
					self.search(term);
					true
				} else {
					false
				}
			}
			_ => false,
		}
	}

	/// Process a mouse event against the areas of the last draw.
	///
	/// Frame-wide pointer-downs must already have been dispatched to the
	/// [`PointerHub`](crate::pointer::PointerHub) this field is mounted on.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if point_in_rect(column, row, self.layout.clear) {
					self.focus_clear();
					self.clear();
					true
				} else if point_in_rect(column, row, self.layout.search) {
					self.focus_input();
					true
				} else if let Some(index) = self.option_at(column, row) {
					self.pick(index)
				} else {
					false
				}
			}
			MouseEventKind::ScrollDown if self.over_options(column, row) => {
				self.move_highlight(1);
				true
			}
			MouseEventKind::ScrollUp if self.over_options(column, row) => {
				self.move_highlight(-1);
				true
			}
			_ => false,
		}
	}

	fn cycle_focus(&mut self, forward: bool) {
		// Two stops, so both directions alternate once something has focus.
		let to_search = match self.focus {
			Focus::Search => false,
			Focus::Clear => true,
			Focus::None => forward,
		};
		if to_search {
			self.focus_input();
		} else {
			self.focus_clear();
		}
	}

	fn option_at(&self, column: u16, row: u16) -> Option<usize> {
		if !self.is_open() {
			return None;
		}
		self.layout
			.option_rows
			.iter()
			.find(|(area, _)| point_in_rect(column, row, *area))
			.map(|(_, index)| *index)
	}

	fn over_options(&self, column: u16, row: u16) -> bool {
		self.is_open() && point_in_rect(column, row, self.layout.options)
	}

	fn page_size(&self) -> isize {
		isize::try_from(self.layout.options.height.max(1)).unwrap_or(1)
	}
}
