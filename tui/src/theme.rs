//! Color themes and glyphs for the Roster TUI.
//!
//! Light mode uses a cool "winter" palette; dark mode uses Kanagawa Wave.

use ratatui::style::{Color, Modifier, Style};

use roster_engine::ThemeMode;
use roster_engine::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod night {
    use super::Color;

    pub const BG: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const WARNING: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ERROR: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const PEACH: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

/// Cool slate palette for light mode.
mod winter {
    use super::Color;

    pub const BG: Color = Color::Rgb(241, 245, 249); // slate-100
    pub const BG_PANEL: Color = Color::Rgb(255, 255, 255);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(219, 234, 254); // blue-100
    pub const BORDER: Color = Color::Rgb(148, 163, 184); // slate-400

    pub const TEXT_PRIMARY: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const TEXT_SECONDARY: Color = Color::Rgb(51, 65, 85); // slate-700
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500

    pub const PRIMARY: Color = Color::Rgb(3, 105, 161); // sky-700
    pub const ACCENT: Color = Color::Rgb(14, 116, 144); // cyan-700
    pub const SUCCESS: Color = Color::Rgb(21, 128, 61); // green-700
    pub const WARNING: Color = Color::Rgb(180, 83, 9); // amber-700
    pub const ERROR: Color = Color::Rgb(220, 38, 38); // red-600
    pub const PEACH: Color = Color::Rgb(194, 65, 12); // orange-700
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: winter::BG,
            bg_panel: winter::BG_PANEL,
            bg_highlight: winter::BG_HIGHLIGHT,
            border: winter::BORDER,
            text_primary: winter::TEXT_PRIMARY,
            text_secondary: winter::TEXT_SECONDARY,
            text_muted: winter::TEXT_MUTED,
            primary: winter::PRIMARY,
            accent: winter::ACCENT,
            success: winter::SUCCESS,
            warning: winter::WARNING,
            error: winter::ERROR,
            peach: winter::PEACH,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: night::BG,
            bg_panel: night::BG_PANEL,
            bg_highlight: night::BG_HIGHLIGHT,
            border: night::BORDER,
            text_primary: night::TEXT_PRIMARY,
            text_secondary: night::TEXT_SECONDARY,
            text_muted: night::TEXT_MUTED,
            primary: night::PRIMARY,
            accent: night::ACCENT,
            success: night::SUCCESS,
            warning: night::WARNING,
            error: night::ERROR,
            peach: night::PEACH,
        }
    }
}

#[must_use]
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette::light(),
        ThemeMode::Dark => Palette::dark(),
    }
}

/// ASCII/Unicode glyphs for icons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub sun: &'static str,
    pub moon: &'static str,
    pub selected: &'static str,
    pub error: &'static str,
    pub separator: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn theme_indicator(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.sun,
            ThemeMode::Dark => self.moon,
        }
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            sun: "(*)",
            moon: "(C)",
            selected: ">",
            error: "!",
            separator: "|",
        }
    } else {
        Glyphs {
            sun: "☀",
            moon: "☾",
            selected: "▸",
            error: "✗",
            separator: "│",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn label(palette: &Palette, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        }
    }

    #[must_use]
    pub fn field_border(palette: &Palette, focused: bool, invalid: bool) -> Style {
        let color = if invalid {
            palette.error
        } else if focused {
            palette.accent
        } else {
            palette.border
        };
        Style::default().fg(color)
    }

    #[must_use]
    pub fn field_error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }

    #[must_use]
    pub fn selected_row(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_panel)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn danger_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_panel)
            .bg(palette.error)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
