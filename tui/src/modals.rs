//! The edit overlay and the delete confirmation dialog.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use roster_engine::{App, DELETE_PROMPT, FormField};

use crate::effects::apply_modal_effect;
use crate::fields::{FIELD_HEIGHT, draw_field};
use crate::theme::{Glyphs, Palette, styles};

const EDIT_WIDTH: u16 = 52;
const CONFIRM_WIDTH: u16 = 50;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

fn modal_block<'a>(title: &'a str, border: Color, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Where a modal lands this frame: its resting rect and the rect after any
/// running effect.
fn modal_area(app: &App, frame_area: Rect, width: u16, height: u16) -> (Rect, Rect) {
    let base = centered(frame_area, width, height);
    let area = match app.modal_effect() {
        Some(effect) => apply_modal_effect(effect, base, frame_area),
        None => base,
    };
    (base, area)
}

pub(crate) fn draw_edit_overlay(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let overlay = app.edit_overlay();
    if !overlay.is_visible() {
        return;
    }

    // Two fields, a blank spacer, the action row, plus borders.
    let height = FIELD_HEIGHT * 2 + 4;
    let (base, area) = modal_area(app, frame.area(), EDIT_WIDTH, height);
    let block = modal_block("Edit User", palette.primary, palette);
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    // Mid-animation the rect is smaller than the content; skip the body until it fits.
    if area.height < base.height || area.width < base.width {
        return;
    }

    let [name_area, age_area, _, actions_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    let form = overlay.state();
    draw_field(frame, name_area, form, FormField::Name, true, palette, glyphs);
    draw_field(frame, age_area, form, FormField::Age, true, palette, glyphs);

    let actions = Line::from(vec![
        Span::styled(" Cancel ", Style::default().fg(palette.text_secondary)),
        Span::styled(" Esc", styles::key_highlight(palette)),
        Span::raw("    "),
        Span::styled(" Save ", styles::button(palette)),
        Span::styled(" Enter", styles::key_highlight(palette)),
    ]);
    frame.render_widget(Paragraph::new(actions), actions_area);
}

pub(crate) fn draw_confirm_dialog(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(record) = app.pending_removal() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            DELETE_PROMPT,
            Style::default().fg(palette.text_primary),
        )),
        Line::from(Span::styled(
            record.summary(),
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Delete ", styles::danger_button(palette)),
            Span::styled(" y", styles::key_highlight(palette)),
            Span::raw("    "),
            Span::styled(" Cancel ", Style::default().fg(palette.text_secondary)),
            Span::styled(" n/Esc", styles::key_highlight(palette)),
        ]),
    ];

    let height = lines.len() as u16 + 2;
    let (_, area) = modal_area(app, frame.area(), CONFIRM_WIDTH, height);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(modal_block("Delete User", palette.error, palette)),
        area,
    );
}
