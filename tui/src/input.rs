//! Input handling for the Roster TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use roster_engine::ui::DraftInput;
use roster_engine::{App, Focus, InputMode};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending events into `app`. Returns `true` once the app wants to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `app.should_quit()` afterwards.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') => {
                        app.request_quit();
                        return true;
                    }
                    KeyCode::Char('t') if app.input_mode() != InputMode::ConfirmRemove => {
                        let mode = app.toggle_theme();
                        debug!(theme = %mode, "Theme toggled from keyboard");
                        return app.should_quit();
                    }
                    _ => {}
                }
            }

            match app.input_mode() {
                InputMode::Main => handle_main(app, key),
                InputMode::EditOverlay => handle_edit_overlay(app, key),
                InputMode::ConfirmRemove => handle_confirm(app, key),
            }
        }
        Event::Paste(text) => {
            if let Some(draft) = app.active_draft_mut() {
                draft.enter_text(&text);
            }
        }
        Event::Resize(..) => app.mark_dirty(),
        _ => {}
    }
    app.should_quit()
}

fn handle_main(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    if app.focus() == Focus::List {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
            KeyCode::Char('j') | KeyCode::Down => app.select_next(),
            KeyCode::Char('e') | KeyCode::Enter => {
                app.edit_selected();
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                app.request_remove_selected();
            }
            KeyCode::Char('a') => app.set_focus(Focus::Name),
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Esc => app.dismiss_notice(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit_add();
        }
        KeyCode::Esc => app.dismiss_notice(),
        _ => {
            if let Some(draft) = app.active_draft_mut() {
                edit_draft(draft, key);
            }
        }
    }
}

fn handle_edit_overlay(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_edit();
        }
        KeyCode::Enter => {
            app.submit_edit();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.edit_focus_next(),
        _ => {
            if let Some(draft) = app.active_draft_mut() {
                edit_draft(draft, key);
            }
        }
    }
}

fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            app.resolve_removal(true);
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.resolve_removal(false);
        }
        _ => {}
    }
}

/// Line-editing keys shared by every text field.
fn edit_draft(draft: &mut DraftInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            draft.delete_word_backwards();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => draft.clear(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            draft.enter_char(c);
        }
        KeyCode::Backspace => draft.delete_char(),
        KeyCode::Delete => draft.delete_char_forward(),
        KeyCode::Left => draft.move_cursor_left(),
        KeyCode::Right => draft.move_cursor_right(),
        KeyCode::Home => draft.reset_cursor(),
        KeyCode::End => draft.move_cursor_end(),
        _ => {}
    }
}
