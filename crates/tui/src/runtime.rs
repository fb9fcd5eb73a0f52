//! Terminal host and event loop for a single icon field.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::stdout;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use iconpick_api::{FieldChange, HiddenField};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
	KeyModifiers,
};
use ratatui::crossterm::execute;
use ratatui::widgets::Block;
use serde::Serialize;

use crate::field::{FieldProps, IconField};
use crate::i18n::Translate;
use crate::pointer::{PointerDown, PointerHub};
use crate::sink::{ChangeLog, ValueSink};
use crate::style::Theme;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
	/// `true` when the user confirmed with Enter, `false` on Esc or Ctrl+C.
	pub accepted: bool,
	/// The hidden form field as it stood when the session ended.
	pub field: HiddenField,
	/// Every change notification, in order.
	pub changes: Vec<FieldChange>,
}

enum Exit {
	Accept,
	Cancel,
}

/// Mount a field for `props` and run it until the user accepts or cancels.
///
/// The loop plays the host's part: change notifications are fed back into the
/// field as its new value, and every left-button press is first delivered to
/// the frame-wide [`PointerHub`].
pub fn run(props: FieldProps, theme: Theme, translator: impl Translate + 'static) -> Result<FieldOutcome> {
	let hub = PointerHub::new();
	let log = Rc::new(RefCell::new(ChangeLog::new()));
	let sink_log = Rc::clone(&log);
	let mut field = IconField::mount(
		props,
		move |id: &str, value: &str| sink_log.borrow_mut().change(id, value),
		&hub,
	)
	.with_translator(translator);
	let mut changes = Vec::new();

	let mut terminal = ratatui::init();
	terminal.clear()?;
	execute!(stdout(), EnableMouseCapture)?;

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();

	let result: Result<bool> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		let mut exit = None;
		while let Some(event) = pending_events.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if !field.handle_key(key) {
						exit = host_key(key);
					}
				}
				Event::Mouse(mouse) => {
					if let Some(pointer) = PointerDown::from_mouse(&mouse) {
						hub.dispatch(pointer);
					}
					field.handle_mouse(mouse);
				}
				_ => {}
			}
			for change in log.borrow_mut().drain() {
				field.set_value(change.value.clone());
				changes.push(change);
			}
			if exit.is_some() {
				break;
			}
		}

		match exit {
			Some(Exit::Accept) => break Ok(true),
			Some(Exit::Cancel) => break Ok(false),
			None => {}
		}

		if let Err(err) = terminal.draw(|frame| {
			let block = Block::bordered().title(format!(" {} ", field.props().name));
			let inner = block.inner(frame.area());
			frame.render_widget(block, frame.area());
			field.draw(frame, inner, &theme);
		}) {
			break Err(err.into());
		}

		thread::sleep(Duration::from_millis(16));
	};

	ratatui::restore();
	execute!(stdout(), DisableMouseCapture)?;

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	let accepted = result?;
	tracing::info!(
		target: "iconpick_tui::field",
		id = %field.id(),
		accepted,
		changes = changes.len(),
		"session finished"
	);
	Ok(FieldOutcome {
		accepted,
		field: field.hidden_field(),
		changes,
	})
}

fn host_key(key: KeyEvent) -> Option<Exit> {
	match key.code {
		KeyCode::Esc => Some(Exit::Cancel),
		KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Exit::Cancel),
		KeyCode::Enter => Some(Exit::Accept),
		_ => None,
	}
}
