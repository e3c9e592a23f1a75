//! TUI rendering for Roster using ratatui.

mod effects;
mod fields;
mod input;
mod modals;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use roster_engine::{App, Focus, FormField, InputMode, NoticeLevel};

use self::fields::{FIELD_HEIGHT, draw_field};
use self::modals::{draw_confirm_dialog, draw_edit_overlay};

const APP_TITLE: &str = "User Registry";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let mode = app.theme_mode();
    let palette = palette(mode);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let [header, form, list, status] = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),                // Header
            Constraint::Length(FIELD_HEIGHT + 3), // Add form
            Constraint::Min(3),                   // Users
            Constraint::Length(1),                // Status bar
        ])
        .areas(frame.area());

    draw_header(frame, app, header, &palette, &glyphs);
    draw_add_form(frame, app, form, &palette, &glyphs);
    draw_users(frame, app, list, &palette, &glyphs);
    draw_status_bar(frame, app, status, &palette, &glyphs);

    match app.input_mode() {
        InputMode::Main => {}
        InputMode::EditOverlay => draw_edit_overlay(frame, app, &palette, &glyphs),
        InputMode::ConfirmRemove => draw_confirm_dialog(frame, app, &palette),
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mode = app.theme_mode();
    let indicator = format!(
        "{} {}  ",
        glyphs.theme_indicator(mode),
        mode.label()
    );
    let indicator_width = indicator.width() as u16 + 6;

    let [title_area, theme_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(indicator_width)])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {APP_TITLE}"),
            styles::title(palette),
        ))),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(indicator, Style::default().fg(palette.text_secondary)),
            Span::styled("^T ", styles::key_highlight(palette)),
        ]))
        .alignment(Alignment::Right),
        theme_area,
    );
}

fn draw_add_form(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let active = app.input_mode() == InputMode::Main && app.focus() != Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if active {
            palette.primary
        } else {
            palette.border
        }))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(" Add User ", styles::title(palette)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [fields_area, action_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(1)])
        .areas(inner);
    let [name_area, age_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .areas(fields_area);

    let form = app.add_form().state();
    draw_field(frame, name_area, form, FormField::Name, active, palette, glyphs);
    draw_field(frame, age_area, form, FormField::Age, active, palette, glyphs);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Add User ", styles::button(palette)),
            Span::styled(" Enter", styles::key_highlight(palette)),
        ])),
        action_area,
    );
}

fn draw_users(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let users = app.users();
    let list_focused = app.input_mode() == InputMode::Main && app.focus() == Focus::List;
    let selected = app.selected_index();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if list_focused {
            palette.primary
        } else {
            palette.border
        }))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(
            format!(" Users ({}) ", users.len()),
            styles::title(palette),
        ));
    let inner = block.inner(area);

    if users.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No users yet. Add one above.",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Keep the selected row on screen.
    let visible = inner.height.max(1) as usize;
    let offset = selected.map_or(0, |index| (index + 1).saturating_sub(visible));

    let lines: Vec<Line> = users
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, record)| {
            let is_selected = selected == Some(index);
            let pointer = if is_selected { glyphs.selected } else { " " };
            let mut spans = vec![Span::raw(format!(" {pointer} ")), Span::raw(record.summary())];
            if is_selected && list_focused {
                spans.push(Span::raw("   "));
                spans.push(Span::styled("e", styles::key_highlight(palette)));
                spans.push(Span::styled(" edit  ", styles::key_hint(palette)));
                spans.push(Span::styled("d", styles::key_highlight(palette)));
                spans.push(Span::styled(" delete", styles::key_hint(palette)));
            }
            let style = if is_selected && list_focused {
                styles::selected_row(palette)
            } else {
                Style::default().fg(palette.text_primary)
            };
            Line::from(spans).style(style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if let Some(notice) = app.notice() {
        let (prefix, color) = match notice.level {
            NoticeLevel::Error => ("Error: ", palette.error),
            NoticeLevel::Warning => ("Warning: ", palette.warning),
            NoticeLevel::Info => ("", palette.success),
        };
        let status = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{prefix}{}", notice.text), Style::default().fg(color)),
        ]));
        frame.render_widget(status, area);
        return;
    }

    let hints: &[(&str, &str)] = match (app.input_mode(), app.focus()) {
        (InputMode::ConfirmRemove, _) => &[("y", "delete"), ("n/Esc", "cancel")],
        (InputMode::EditOverlay, _) => &[("Tab", "field"), ("Enter", "save"), ("Esc", "cancel")],
        (InputMode::Main, Focus::List) => &[
            ("↑↓", "select"),
            ("e", "edit"),
            ("d", "delete"),
            ("Tab", "focus"),
            ("q", "quit"),
        ],
        (InputMode::Main, _) => &[
            ("Enter", "add"),
            ("Tab", "next field"),
            ("^T", "theme"),
            ("^C", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
