use iconpick_api::{FieldDescriptor, IconOption};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Block;

use crate::field::{FieldProps, IconField, OptionList, render_options};
use crate::pointer::PointerHub;
use crate::style::Theme;

fn options() -> Vec<IconOption> {
	vec![
		IconOption::new("star", "Star", "icon-star").with_contents("S"),
		IconOption::new("heart", "Heart", "icon-heart").with_contents("H"),
		IconOption::new("home", "Home", "icon-home").with_contents("^"),
	]
}

#[test]
fn option_list_marks_active_value_snapshot() {
	let options = options();
	let theme = Theme::default();
	let area = Rect::new(0, 0, 24, 3);
	let mut buf = Buffer::empty(area);
	let rows = render_options(
		&mut buf,
		area,
		OptionList {
			options: &options,
			active_value: "star",
			highlighted: Some(0),
			empty_label: "No results found",
			theme: &theme,
		},
	);

	assert_eq!(rows.iter().map(|(_, index)| *index).collect::<Vec<_>>(), vec![0, 1, 2]);
	assert_eq!(buf[(0, 0)].style().fg, theme.active.fg);
	insta::assert_snapshot!("option_list_marks_active_value", buffer_to_string(&buf));
}

#[test]
fn option_list_scrolls_to_highlight() {
	let options = options();
	let theme = Theme::default();
	let area = Rect::new(0, 0, 24, 2);
	let mut buf = Buffer::empty(area);
	let rows = render_options(
		&mut buf,
		area,
		OptionList {
			options: &options,
			active_value: "",
			highlighted: Some(2),
			empty_label: "No results found",
			theme: &theme,
		},
	);

	assert_eq!(rows.iter().map(|(_, index)| *index).collect::<Vec<_>>(), vec![1, 2]);
	assert_eq!(buffer_to_string(&buf), "  H Heart\n  ^ Home");
}

#[test]
fn empty_option_list_shows_label() {
	let theme = Theme::default();
	let area = Rect::new(0, 0, 24, 1);
	let mut buf = Buffer::empty(area);
	let rows = render_options(
		&mut buf,
		area,
		OptionList {
			options: &[],
			active_value: "",
			highlighted: None,
			empty_label: "No results found",
			theme: &theme,
		},
	);

	assert!(rows.is_empty());
	assert_eq!(buffer_to_string(&buf), "No results found");
}

#[test]
fn bordered_frame_shows_every_part() {
	let hub = PointerHub::new();
	let props = FieldProps::new(FieldDescriptor::new("field-id", options()), "icon", "");
	let mut field = IconField::mount(props, |_: &str, _: &str| {}, &hub);
	field.focus_input();
	field.search("nothing-matches");

	let theme = Theme::default();
	let mut terminal = Terminal::new(TestBackend::new(48, 8)).expect("terminal");
	terminal
		.draw(|frame| {
			let block = Block::bordered().title(" icon ");
			let inner = block.inner(frame.area());
			frame.render_widget(block, frame.area());
			field.draw(frame, inner, &theme);
		})
		.expect("draw frame");

	let snapshot = buffer_to_string(terminal.backend().buffer());
	assert!(snapshot.contains(" icon "), "{snapshot}");
	assert!(snapshot.contains("No icon selected"), "{snapshot}");
	assert!(snapshot.contains("nothing-matches"), "{snapshot}");
	assert!(snapshot.contains("[ Clear ]"), "{snapshot}");
	assert!(snapshot.contains("No results found"), "{snapshot}");
	assert_eq!(field.popup_area(), Rect::new(1, 2, 46, 2));
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}
