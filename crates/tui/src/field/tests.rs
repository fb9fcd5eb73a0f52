use std::cell::RefCell;
use std::rc::Rc;

use iconpick_api::{FieldDescriptor, IconOption};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::*;
use crate::i18n::MessageTable;
use crate::pointer::PointerDown;
use crate::style::Theme;

type Calls = Rc<RefCell<Vec<(String, String)>>>;

fn options() -> Vec<IconOption> {
	vec![
		IconOption::new("star", "Star", "icon-star")
			.with_contents("S")
			.with_search_terms(["favorite"]),
		IconOption::new("heart", "Heart", "icon-heart")
			.with_contents("H")
			.with_search_terms(["love"]),
	]
}

fn mount_with(value: &str, hub: &PointerHub) -> (IconField, Calls) {
	let calls: Calls = Rc::default();
	let recorder = Rc::clone(&calls);
	let props = FieldProps::new(FieldDescriptor::new("field-id", options()), "icon", value);
	let field = IconField::mount(
		props,
		move |id: &str, value: &str| recorder.borrow_mut().push((id.to_string(), value.to_string())),
		hub,
	);
	(field, calls)
}

fn draw(field: &mut IconField) -> Terminal<TestBackend> {
	let mut terminal = Terminal::new(TestBackend::new(40, 8)).expect("terminal");
	let theme = Theme::default();
	terminal
		.draw(|frame| field.draw(frame, frame.area(), &theme))
		.expect("draw");
	terminal
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
	let buffer = terminal.backend().buffer();
	let mut lines = Vec::new();
	for y in 0..buffer.area.height {
		let mut line = String::new();
		for x in 0..buffer.area.width {
			line.push_str(buffer[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn values(options: &[IconOption]) -> Vec<&str> {
	options.iter().map(|option| option.value.as_str()).collect()
}

#[test]
fn mount_starts_closed_with_every_option() {
	let hub = PointerHub::new();
	let (field, calls) = mount_with("", &hub);
	assert_eq!(field.popup(), Popup::Closed);
	assert_eq!(values(field.available()), vec!["star", "heart"]);
	assert!(field.chosen().is_none());
	assert!(calls.borrow().is_empty());
}

#[test]
fn mount_with_value_derives_display_fields() {
	let hub = PointerHub::new();
	let (field, _) = mount_with("heart", &hub);
	assert_eq!(field.chosen().map(|o| o.value.as_str()), Some("heart"));
	assert_eq!(field.selection().icon_class, "icon-heart");
	assert_eq!(field.search_term(), "heart");
	assert_eq!(values(field.available()), vec!["star", "heart"]);
}

#[test]
fn focus_opens_and_pointer_downs_respect_the_popup_area() {
	let hub = PointerHub::new();
	let (mut field, _) = mount_with("", &hub);
	field.focus_input();
	assert_eq!(field.popup(), Popup::Open);
	draw(&mut field);
	assert_eq!(field.popup_area(), Rect::new(0, 1, 40, 3));

	hub.dispatch(PointerDown::new(3, 2));
	assert_eq!(field.popup(), Popup::Open);

	hub.dispatch(PointerDown::new(3, 6));
	assert_eq!(field.popup(), Popup::Closed);
}

#[test]
fn open_request_moves_focus_into_search() {
	let hub = PointerHub::new();
	let (mut field, _) = mount_with("", &hub);
	field.focus_clear();
	field.open_list();
	assert!(field.is_open());
	assert_eq!(field.focus(), Focus::Search);
}

#[test]
fn moving_focus_to_clear_keeps_popup_open() {
	let hub = PointerHub::new();
	let (mut field, _) = mount_with("", &hub);
	field.focus_input();
	assert!(field.handle_key(press(KeyCode::Tab)));
	assert_eq!(field.focus(), Focus::Clear);
	assert!(field.is_open());
}

#[test]
fn star_and_heart_scenario() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("", &hub);
	assert_eq!(values(field.available()), vec!["star", "heart"]);
	assert!(field.chosen().is_none());

	field.focus_input();
	for ch in "fav".chars() {
		assert!(field.handle_key(press(KeyCode::Char(ch))));
	}
	assert_eq!(field.search_term(), "fav");
	assert_eq!(values(field.available()), vec!["star"]);

	assert!(field.pick(0));
	assert_eq!(calls.borrow().as_slice(), &[("field-id".to_string(), "star".to_string())]);
	assert_eq!(field.chosen().map(|o| o.value.as_str()), Some("star"));
	assert_eq!(field.popup(), Popup::Closed);

	field.clear();
	assert_eq!(calls.borrow().len(), 2);
	assert_eq!(calls.borrow()[1], ("field-id".to_string(), String::new()));
	assert!(field.chosen().is_none());
	assert_eq!(field.search_term(), "");
}

#[test]
fn typing_keeps_previous_choice_until_next_pick() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("heart", &hub);
	field.focus_input();
	field.handle_key(press(KeyCode::Backspace));
	assert_eq!(field.search_term(), "hear");
	assert_eq!(field.chosen().map(|o| o.value.as_str()), Some("heart"));
	assert!(calls.borrow().is_empty());
}

#[test]
fn keyboard_navigation_picks_highlighted_option() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("", &hub);
	field.focus_input();
	assert_eq!(field.highlighted(), Some(0));
	assert!(field.handle_key(press(KeyCode::Down)));
	assert!(field.handle_key(press(KeyCode::Down)));
	assert_eq!(field.highlighted(), Some(1));
	assert!(field.handle_key(press(KeyCode::Enter)));
	assert_eq!(calls.borrow()[0].1, "heart");
	assert!(!field.is_open());

	assert!(!field.handle_key(press(KeyCode::Enter)), "closed popup leaves Enter to the host");
}

#[test]
fn clear_button_responds_to_enter() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("star", &hub);
	field.focus_input();
	field.handle_key(press(KeyCode::Tab));
	assert!(field.handle_key(press(KeyCode::Enter)));
	assert_eq!(calls.borrow().as_slice(), &[("field-id".to_string(), String::new())]);
	assert!(field.chosen().is_none());
	assert!(!field.is_open());
}

#[test]
fn clicking_an_option_row_picks_it() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("", &hub);
	field.focus_input();
	draw(&mut field);

	let mouse = click(4, 3);
	if let Some(event) = PointerDown::from_mouse(&mouse) {
		hub.dispatch(event);
	}
	assert!(field.is_open(), "row lies inside the popup");
	assert!(field.handle_mouse(mouse));
	assert_eq!(calls.borrow()[0].1, "heart");
	assert!(!field.is_open());
}

#[test]
fn clicking_clear_button_clears() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("star", &hub);
	draw(&mut field);

	let mouse = click(35, 1);
	if let Some(event) = PointerDown::from_mouse(&mouse) {
		hub.dispatch(event);
	}
	assert!(field.handle_mouse(mouse));
	assert_eq!(calls.borrow()[0].1, "");
	assert_eq!(field.focus(), Focus::Clear);
}

#[test]
fn clicking_search_row_opens_popup() {
	let hub = PointerHub::new();
	let (mut field, _) = mount_with("", &hub);
	draw(&mut field);
	assert!(field.handle_mouse(click(2, 1)));
	assert!(field.is_open());
	assert_eq!(field.focus(), Focus::Search);
}

#[test]
fn pick_out_of_range_is_ignored() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("", &hub);
	assert!(!field.pick(9));
	assert!(calls.borrow().is_empty());
}

#[test]
fn unmount_releases_outside_click_listener() {
	let hub = PointerHub::new();
	let (field, _) = mount_with("", &hub);
	assert_eq!(hub.listener_count(), 1);
	drop(field);
	assert_eq!(hub.listener_count(), 0);
}

#[test]
fn host_value_updates_hidden_field_only() {
	let hub = PointerHub::new();
	let (mut field, _) = mount_with("", &hub);
	field.set_value("heart");
	assert_eq!(field.hidden_field().form_pair(), ("icon", "heart"));
	assert_eq!(field.hidden_field().id, "field-id");
	assert!(field.chosen().is_none());
}

#[test]
fn draw_shows_preview_search_and_list() {
	let hub = PointerHub::new();
	let (mut field, _) = mount_with("star", &hub);
	field.set_value("star");
	field.focus_input();
	let terminal = draw(&mut field);
	let screen = screen(&terminal);
	let lines: Vec<&str> = screen.lines().collect();

	assert!(lines[0].starts_with("S Star  icon-star"), "{screen}");
	assert!(lines[1].starts_with("star"), "{screen}");
	assert!(lines[1].ends_with("[ Clear ]"), "{screen}");
	assert_eq!(lines[2], "* S Star");
	assert_eq!(lines[3], "  H Heart");
}

#[test]
fn draw_uses_translations() {
	let hub = PointerHub::new();
	let (field, _) = mount_with("", &hub);
	let translations = MessageTable::default()
		.with_entry("No icon selected", "Aucune icône")
		.with_entry("Clear", "Effacer")
		.with_entry("No results found", "Aucun résultat");
	let mut field = field.with_translator(translations);
	field.focus_input();
	field.search("zzz");
	let screen = screen(&draw(&mut field));

	assert!(screen.contains("Aucune icône"), "{screen}");
	assert!(screen.contains("[ Effacer ]"), "{screen}");
	assert!(screen.contains("Aucun résultat"), "{screen}");
}

#[test]
fn enter_on_open_list_without_results_stays_in_field() {
	let hub = PointerHub::new();
	let (mut field, calls) = mount_with("", &hub);
	field.focus_input();
	field.search("zzz");
	assert_eq!(field.highlighted(), None);

	assert!(field.handle_key(press(KeyCode::Enter)));
	assert!(field.is_open());
	assert!(calls.borrow().is_empty());
}
