//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use roster_engine::ui::UiOptions;
use roster_engine::{App, PreferenceStore, ThemePreference};
use roster_tui::{apply_event, draw};

/// Options that keep modals static so rendered frames are deterministic.
pub const STILL: UiOptions = UiOptions {
    ascii_only: false,
    reduced_motion: true,
};

pub fn app_with(store: impl PreferenceStore + 'static) -> App {
    App::new(ThemePreference::load(store), STILL)
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

pub fn press_ctrl(app: &mut App, c: char) -> bool {
    apply_event(
        app,
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
    )
}

pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Clear the focused field and type `text` into it.
pub fn replace_field(app: &mut App, text: &str) {
    press_ctrl(app, 'u');
    type_str(app, text);
}

/// Fill the add form through the keyboard and press Enter.
///
/// Expects focus on the name field; leaves focus wherever the app puts it.
pub fn submit_add_form(app: &mut App, name: &str, age: &str) {
    replace_field(app, name);
    press(app, KeyCode::Tab);
    replace_field(app, age);
    press(app, KeyCode::Enter);
}

pub fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

pub fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
