use iconpick_api::IconOption;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::{Focus, IconField};
use crate::i18n::{CLEAR, NO_ICON_SELECTED, NO_RESULTS};
use crate::style::Theme;

/// Argument bundle for [`render_options`].
#[derive(Debug, Clone, Copy)]
pub struct OptionList<'a> {
	pub options: &'a [IconOption],
	/// The host value; the matching option gets the active marker.
	pub active_value: &'a str,
	pub highlighted: Option<usize>,
	/// Text shown when `options` is empty.
	pub empty_label: &'a str,
	pub theme: &'a Theme,
}

impl IconField {
	/// Draw the field into `area` and record the areas used for hit-testing
	/// and outside-click detection.
	///
	/// Rows, top to bottom: preview, search input with clear button, and the
	/// option list while the popup is open.
	pub fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let [preview, search_row, rest] =
			Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
				.areas(area);

		let clear_label = format!("[ {} ]", self.translate(CLEAR));
		let clear_width = u16::try_from(clear_label.width())
			.unwrap_or(u16::MAX)
			.min(search_row.width);
		let [search, _, clear] = Layout::horizontal([
			Constraint::Min(0),
			Constraint::Length(1),
			Constraint::Length(clear_width),
		])
		.areas(search_row);

		self.draw_preview(frame, preview, theme);

		let search_style = if self.focus == Focus::Search {
			theme.search_focused
		} else {
			theme.search
		};
		frame.buffer_mut().set_style(search, search_style);
		self.input.render(frame, search);

		let button_style = if self.focus == Focus::Clear {
			theme.button_focused
		} else {
			theme.button
		};
		frame.render_widget(Paragraph::new(clear_label).style(button_style), clear);

		let mut popup_area = search_row;
		let mut options_area = Rect::default();
		let mut option_rows = Vec::new();
		if self.is_open() && rest.height > 0 {
			let rows = u16::try_from(self.selection.available.len().max(1)).unwrap_or(u16::MAX);
			options_area = Rect {
				height: rows.min(rest.height),
				..rest
			};
			let empty_label = self.translate(NO_RESULTS);
			option_rows = render_options(
				frame.buffer_mut(),
				options_area,
				OptionList {
					options: &self.selection.available,
					active_value: &self.props.value,
					highlighted: self.highlighted,
					empty_label: &empty_label,
					theme,
				},
			);
			popup_area = popup_area.union(options_area);
		}

		self.popup_area.set(popup_area);
		self.layout.search = search;
		self.layout.clear = clear;
		self.layout.options = options_area;
		self.layout.option_rows = option_rows;
	}

	fn draw_preview(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let line = match &self.selection.chosen {
			Some(option) => Line::from(vec![
				// Catalog markup is trusted and written as-is.
				Span::styled(option.contents.clone(), theme.preview),
				Span::raw(" "),
				Span::styled(option.name.clone(), theme.preview),
				Span::raw("  "),
				Span::styled(self.selection.icon_class.clone(), theme.muted),
			]),
			None => Line::from(Span::styled(self.translate(NO_ICON_SELECTED), theme.muted)),
		};
		frame.render_widget(Paragraph::new(line), area);
	}
}

/// Render the option rows into `area` and return each row's area with the
/// index of the option it shows.
///
/// The list scrolls just enough to keep the highlighted option visible. Each
/// option's `contents` is written verbatim.
pub fn render_options(buf: &mut Buffer, area: Rect, list: OptionList<'_>) -> Vec<(Rect, usize)> {
	let OptionList {
		options,
		active_value,
		highlighted,
		empty_label,
		theme,
	} = list;

	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}
	if options.is_empty() {
		buf.set_stringn(area.x, area.y, empty_label, usize::from(area.width), theme.muted);
		return Vec::new();
	}

	let height = usize::from(area.height);
	let offset = match highlighted {
		Some(index) if index >= height => index + 1 - height,
		_ => 0,
	};

	let mut rows = Vec::with_capacity(height.min(options.len()));
	for (y, (index, option)) in (area.y..area.bottom()).zip(options.iter().enumerate().skip(offset)) {
		let row = Rect::new(area.x, y, area.width, 1);
		let style = if highlighted == Some(index) {
			theme.highlight
		} else {
			theme.option
		};
		buf.set_style(row, style);

		let marker = if option.value == active_value {
			Span::styled("*", theme.active)
		} else {
			Span::raw(" ")
		};
		let line = Line::from(vec![
			marker,
			Span::raw(" "),
			Span::raw(option.contents.as_str()),
			Span::raw(" "),
			Span::raw(option.name.as_str()),
		]);
		buf.set_line(row.x, row.y, &line, row.width);
		rows.push((row, index));
	}
	rows
}
