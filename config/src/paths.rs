use std::env;
use std::path::PathBuf;

pub const HOME_ENV: &str = "ROSTER_HOME";

/// `$ROSTER_HOME` when set and non-empty, otherwise `~/.roster`.
#[must_use]
pub fn roster_home() -> Option<PathBuf> {
    match env::var_os(HOME_ENV) {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => dirs::home_dir().map(|home| home.join(".roster")),
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    roster_home().map(|home| home.join("config.toml"))
}

#[must_use]
pub fn preferences_path() -> Option<PathBuf> {
    roster_home().map(|home| home.join("preferences.toml"))
}

/// Log file locations in order of preference.
#[must_use]
pub fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: <roster home>/logs/roster.log
    if let Some(home) = roster_home() {
        candidates.push(home.join("logs").join("roster.log"));
    }

    // Fallback: ./.roster/logs/roster.log (useful in constrained environments)
    candidates.push(PathBuf::from(".roster").join("logs").join("roster.log"));

    candidates
}
