//! Theme choice written through the TOML preferences file and read back.

use std::fs;

use roster_config::{FilePreferenceStore, RosterConfig};
use roster_engine::ThemeMode;
use roster_engine::ui::UiOptions;

use crate::common::{app_with, press_ctrl};

#[test]
fn toggle_persists_night_and_reload_applies_dark() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let mut app = app_with(FilePreferenceStore::new(&path));
    assert_eq!(app.theme_mode(), ThemeMode::Light);

    press_ctrl(&mut app, 't');
    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    assert!(fs::read_to_string(&path).unwrap().contains("theme = \"night\""));

    let reloaded = app_with(FilePreferenceStore::new(&path));
    assert_eq!(reloaded.theme_mode(), ThemeMode::Dark);
}

#[test]
fn toggle_back_persists_winter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    fs::write(&path, "# my prefs\ntheme = \"night\"\n").unwrap();

    let mut app = app_with(FilePreferenceStore::new(&path));
    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    press_ctrl(&mut app, 't');

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# my prefs"));
    assert!(content.contains("theme = \"winter\""));
    assert_eq!(
        app_with(FilePreferenceStore::new(&path)).theme_mode(),
        ThemeMode::Light
    );
}

#[test]
fn failed_write_still_switches_theme() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail.
    let path = dir.path().join("preferences.toml");
    fs::create_dir(&path).unwrap();

    let mut app = app_with(FilePreferenceStore::new(&path));
    press_ctrl(&mut app, 't');

    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    assert!(app.notice().is_some_and(|n| n.text.starts_with("Theme not saved")));
}

#[test]
fn config_file_controls_ui_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nascii_only = true\n").unwrap();

    let config = RosterConfig::load_from(&path).unwrap().unwrap();

    assert_eq!(
        config.ui_options(),
        UiOptions {
            ascii_only: true,
            reduced_motion: false,
        }
    );
}
