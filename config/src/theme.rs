//! Persisted light/dark preference.

use roster_types::ThemeMode;

use crate::preferences::{PreferenceError, PreferenceStore};

/// The active theme plus the store it is persisted in.
///
/// Read once at startup; every toggle writes through. A failed write is
/// returned to the caller, but the active mode has already changed.
pub struct ThemePreference {
    store: Box<dyn PreferenceStore>,
    mode: ThemeMode,
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl ThemePreference {
    /// Read the persisted mode, falling back to light when absent, unreadable
    /// or unrecognised.
    pub fn load(store: impl PreferenceStore + 'static) -> Self {
        let mode = match store.get(ThemeMode::PREFERENCE_KEY) {
            Ok(Some(raw)) => ThemeMode::from_marker(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown theme preference; using light");
                ThemeMode::default()
            }),
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                tracing::warn!("Failed to read theme preference: {err}");
                ThemeMode::default()
            }
        };
        tracing::info!(theme = %mode, "Theme applied");
        Self {
            store: Box::new(store),
            mode,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the toggle switch is in the "on" (dark) position.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.mode.is_dark()
    }

    /// Apply the mode for the toggle position and persist it.
    pub fn set_toggle(&mut self, on: bool) -> Result<ThemeMode, PreferenceError> {
        self.mode = ThemeMode::from_toggle(on);
        self.store
            .set(ThemeMode::PREFERENCE_KEY, self.mode.marker())?;
        tracing::info!(theme = %self.mode, "Theme toggled");
        Ok(self.mode)
    }

    /// Flip the switch.
    pub fn toggle(&mut self) -> Result<ThemeMode, PreferenceError> {
        self.set_toggle(!self.is_on())
    }
}
