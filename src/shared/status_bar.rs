//! Status bar UI component.

use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, fetching: bool, colors: &ThemeColors) {
    let text = if fetching {
        format!("{} (fetching...)", status)
    } else {
        status.to_string()
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.text).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
