//! Location input UI rendering.

use super::LocationInput;
use crate::shared::ThemeColors;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the location field.
///
/// While inactive the field shows `query`; while active it shows the edit
/// buffer, highlighted when selected, and places the terminal cursor.
pub fn draw_location_input(
    f: &mut Frame<'_>,
    input: &LocationInput,
    query: &str,
    area: Rect,
    colors: &ThemeColors,
) {
    let line = if input.is_active() {
        let style = if input.is_selected() {
            Style::default().fg(colors.bg).bg(colors.selection)
        } else {
            Style::default().fg(colors.text)
        };
        Line::from(Span::styled(input.buffer().to_string(), style))
    } else if query.is_empty() {
        Line::from(Span::styled(
            "Enter a city and state or a zip code",
            Style::default().fg(colors.muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(query.to_string(), Style::default().fg(colors.text)))
    };

    let border = if input.is_active() {
        colors.focus
    } else {
        colors.border
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Location ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);

    if input.is_active() {
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(input.cursor_offset()).min(max_x);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
