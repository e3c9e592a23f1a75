use std::fmt;

/// Light/dark presentation mode.
///
/// The persisted markers (`winter`, `night`) are the values written under the
/// `theme` preference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const PREFERENCE_KEY: &'static str = "theme";

    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Light => "winter",
            Self::Dark => "night",
        }
    }

    /// Parse a persisted marker. `light`/`dark` are accepted as aliases.
    #[must_use]
    pub fn from_marker(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "winter" | "light" => Some(Self::Light),
            "night" | "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Mode selected by the toggle switch: on is dark, off is light.
    #[must_use]
    pub const fn from_toggle(on: bool) -> Self {
        if on { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn markers_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_marker(mode.marker()), Some(mode));
        }
    }

    #[test]
    fn unknown_marker_is_rejected() {
        assert_eq!(ThemeMode::from_marker("solarized"), None);
        assert_eq!(ThemeMode::from_marker(""), None);
    }

    #[test]
    fn toggle_on_means_dark() {
        assert_eq!(ThemeMode::from_toggle(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_toggle(false), ThemeMode::Light);
    }
}
