//! Text field rendering shared by the add form and the edit overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use roster_engine::{FormField, FormState};

use crate::theme::{Glyphs, Palette, styles};

/// Rows a field needs: a bordered input plus one line for its error.
pub(crate) const FIELD_HEIGHT: u16 = 4;

/// Draw one labelled input with its inline error underneath.
///
/// `active` means keystrokes currently go to this form; only then does the
/// focused field show the terminal cursor.
pub(crate) fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    field: FormField,
    active: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let [input_area, error_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .areas(area);

    let focused = active && form.focus() == field;
    let error = form.errors().get(field);
    let draft = form.field(field);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::field_border(palette, focused, error.is_some()))
        .title(Span::styled(
            format!(" {} ", field.label()),
            styles::label(palette, focused),
        ));
    let inner = block.inner(input_area);

    // Keep the cursor visible by scrolling long values horizontally.
    let before_cursor = &draft.text()[..draft.byte_index()];
    let cursor_col = before_cursor.width() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    let input = Paragraph::new(Line::from(Span::raw(draft.text())))
        .style(Style::default().fg(palette.text_primary))
        .scroll((0, scroll))
        .block(block);
    frame.render_widget(input, input_area);

    if focused && inner.width > 0 {
        frame.set_cursor_position((inner.x + cursor_col - scroll, inner.y));
    }

    if let Some(message) = error {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", glyphs.error), styles::field_error(palette)),
            Span::styled(message, styles::field_error(palette)),
        ]);
        frame.render_widget(Paragraph::new(line), error_area);
    }
}
