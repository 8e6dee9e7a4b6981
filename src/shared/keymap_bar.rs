//! Keymap help bar UI component.

use crate::shared::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, editing: bool, colors: &ThemeColors) {
    let keymap_text = if editing {
        "Enter:search | Esc:cancel | ←:keep text | Type a city and state or a zip code"
    } else {
        "q:quit | /:location | Enter:refresh | 1/2/3:hourly | jk:scroll | r:relocate | T:theme | Esc:dismiss"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
