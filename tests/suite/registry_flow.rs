//! Add, edit and remove driven through key events, as a user would.

use crossterm::event::KeyCode;

use roster_engine::{
    AGE_REQUIRED, App, Focus, FormField, InputMode, MemoryPreferenceStore, NAME_REQUIRED,
};

use crate::common::{app_with, press, press_ctrl, replace_field, submit_add_form, type_str};

fn fresh_app() -> App {
    app_with(MemoryPreferenceStore::new())
}

fn add_form_error(app: &App, field: FormField) -> Option<&'static str> {
    app.add_form().state().errors().get(field)
}

#[test]
fn add_scenario_rejects_then_accepts() {
    let mut app = fresh_app();

    submit_add_form(&mut app, "", "5");
    assert_eq!(add_form_error(&app, FormField::Name), Some(NAME_REQUIRED));
    assert_eq!(add_form_error(&app, FormField::Age), None);
    assert!(app.users().is_empty());

    app.set_focus(Focus::Name);
    submit_add_form(&mut app, "Bob", "-2");
    assert_eq!(add_form_error(&app, FormField::Name), None);
    assert_eq!(add_form_error(&app, FormField::Age), Some(AGE_REQUIRED));
    assert!(app.users().is_empty());

    app.set_focus(Focus::Name);
    submit_add_form(&mut app, "Bob", "25");
    assert_eq!(app.users().len(), 1);
    assert_eq!(app.users()[0].summary(), "Bob - 25 years old");
    assert!(app.add_form().state().errors().is_empty());
    assert!(app.add_form().state().field(FormField::Name).is_empty());
    assert!(app.add_form().state().field(FormField::Age).is_empty());
}

#[test]
fn ids_are_unique_across_adds_and_removals() {
    let mut app = fresh_app();
    for (name, age) in [("Ann", "30"), ("Bob", "25"), ("Cy", "41")] {
        submit_add_form(&mut app, name, age);
    }
    let first = app.users()[0].id;
    app.request_remove(first);
    press(&mut app, KeyCode::Char('y'));

    submit_add_form(&mut app, "Dee", "19");

    let mut ids: Vec<_> = app.users().iter().map(|r| r.id).collect();
    assert!(!ids.contains(&first));
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn edit_scenario_updates_only_the_target() {
    let mut app = fresh_app();
    submit_add_form(&mut app, "Ann", "30");
    submit_add_form(&mut app, "Bob", "25");
    let bob = app.users()[1].clone();

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::List);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.input_mode(), InputMode::EditOverlay);
    let form = app.edit_overlay().state();
    assert_eq!(form.field(FormField::Name).text(), "Ann");
    assert_eq!(form.field(FormField::Age).text(), "30");

    press(&mut app, KeyCode::Tab);
    replace_field(&mut app, "31");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode(), InputMode::Main);
    assert_eq!(app.users().len(), 2);
    assert_eq!(app.users()[0].summary(), "Ann - 31 years old");
    assert_eq!(app.users()[1], bob);
}

#[test]
fn invalid_edit_keeps_overlay_and_add_form_untouched() {
    let mut app = fresh_app();
    submit_add_form(&mut app, "Ann", "30");
    type_str(&mut app, "draft");

    let ann = app.users()[0].id;
    app.open_edit(ann);
    replace_field(&mut app, "");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode(), InputMode::EditOverlay);
    assert_eq!(
        app.edit_overlay().state().errors().get(FormField::Name),
        Some(NAME_REQUIRED)
    );
    assert!(app.add_form().state().errors().is_empty());
    assert_eq!(app.add_form().state().field(FormField::Name).text(), "draft");
    assert_eq!(app.users()[0].name.as_str(), "Ann");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode(), InputMode::Main);
    assert_eq!(app.users()[0].name.as_str(), "Ann");
}

#[test]
fn invalid_add_leaves_closed_overlay_untouched() {
    let mut app = fresh_app();
    submit_add_form(&mut app, "Ann", "30");
    let ann = app.users()[0].clone();

    app.open_edit(ann.id);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode(), InputMode::Main);

    app.set_focus(Focus::Name);
    submit_add_form(&mut app, "", "abc");
    assert_eq!(add_form_error(&app, FormField::Name), Some(NAME_REQUIRED));
    assert_eq!(add_form_error(&app, FormField::Age), Some(AGE_REQUIRED));

    let overlay = app.edit_overlay();
    assert!(!overlay.is_visible());
    assert_eq!(overlay.target(), Some(&ann));
    assert!(overlay.state().errors().is_empty());
    assert_eq!(overlay.state().field(FormField::Name).text(), "Ann");
    assert_eq!(overlay.state().field(FormField::Age).text(), "30");
    assert_eq!(app.users(), std::slice::from_ref(&ann));
}

#[test]
fn remove_scenario_honours_the_answer() {
    let mut app = fresh_app();
    submit_add_form(&mut app, "Ann", "30");
    submit_add_form(&mut app, "Bob", "25");
    press(&mut app, KeyCode::BackTab);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.pending_removal().map(|r| r.name.as_str()), Some("Ann"));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.users().len(), 2);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.users().len(), 1);
    assert_eq!(app.users()[0].name.as_str(), "Bob");
}

#[test]
fn quit_keys() {
    let mut app = fresh_app();
    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::BackTab);
    assert!(press(&mut app, KeyCode::Char('q')));

    let mut app = fresh_app();
    assert!(press_ctrl(&mut app, 'c'));
}
