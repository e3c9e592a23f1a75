//! Full frames rendered to a test backend.

use crossterm::event::KeyCode;

use roster_engine::{MemoryPreferenceStore, ThemeMode};

use crate::common::{app_with, press, render, screen_text, submit_add_form};

#[test]
fn list_reflects_registry_after_each_change() {
    let mut app = app_with(MemoryPreferenceStore::new());
    submit_add_form(&mut app, "Ann", "30");
    submit_add_form(&mut app, "Bob", "25");

    let text = screen_text(&render(&app, 80, 24));
    assert!(text.contains("Ann - 30 years old"));
    assert!(text.contains("Bob - 25 years old"));

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Char('d'));
    let text = screen_text(&render(&app, 80, 24));
    assert!(text.contains("Are you sure you want to delete this user?"));

    press(&mut app, KeyCode::Char('y'));
    let text = screen_text(&render(&app, 80, 24));
    assert!(!text.contains("Ann - 30 years old"));
    assert!(text.contains("Bob - 25 years old"));
}

#[test]
fn stored_dark_theme_applies_before_first_interaction() {
    let app = app_with(MemoryPreferenceStore::with_value("theme", "night"));
    assert_eq!(app.theme_mode(), ThemeMode::Dark);

    let buffer = render(&app, 80, 24);

    assert_eq!(buffer[(0, 0)].bg, roster_tui::Palette::dark().bg);
    assert!(screen_text(&buffer).contains("dark"));
}

#[test]
fn small_terminal_does_not_panic() {
    let mut app = app_with(MemoryPreferenceStore::new());
    submit_add_form(&mut app, "Ann", "30");
    let id = app.users()[0].id;
    app.open_edit(id);

    render(&app, 20, 6);
}
