//! Gruvbox palettes.

use crate::app::Theme;
use ratatui::style::Color;

/// Colors the weather screen draws with.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Panel and selected-text background.
    pub bg: Color,
    /// Body text, also the status bar text.
    pub text: Color,
    /// Place name and day titles.
    pub heading: Color,
    /// Stat labels and hourly times.
    pub label: Color,
    /// Stat values.
    pub value: Color,
    /// Local time and dates.
    pub clock: Color,
    /// Idle borders.
    pub border: Color,
    /// Border of the focused location field.
    pub focus: Color,
    /// Highlight behind selected location text.
    pub selection: Color,
    /// Status bar background.
    pub status_bg: Color,
    /// Placeholders and hints.
    pub muted: Color,
    /// Error banner.
    pub error: Color,
}

const GRUVBOX_DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(40, 40, 40),
    text: Color::Rgb(235, 219, 178),
    heading: Color::Rgb(251, 184, 108),
    label: Color::Rgb(184, 187, 38),
    value: Color::Rgb(142, 192, 124),
    clock: Color::Rgb(152, 151, 26),
    border: Color::Rgb(102, 92, 84),
    focus: Color::Rgb(131, 165, 152),
    selection: Color::Rgb(250, 189, 47),
    status_bg: Color::Rgb(60, 56, 54),
    muted: Color::Rgb(146, 131, 116),
    error: Color::Rgb(251, 73, 52),
};

const GRUVBOX_LIGHT: ThemeColors = ThemeColors {
    bg: Color::Rgb(251, 241, 199),
    text: Color::Rgb(60, 56, 54),
    heading: Color::Rgb(175, 58, 3),
    label: Color::Rgb(121, 116, 14),
    value: Color::Rgb(66, 123, 88),
    clock: Color::Rgb(152, 151, 26),
    border: Color::Rgb(189, 174, 147),
    focus: Color::Rgb(7, 102, 120),
    selection: Color::Rgb(181, 118, 20),
    status_bg: Color::Rgb(235, 219, 178),
    muted: Color::Rgb(124, 111, 100),
    error: Color::Rgb(157, 0, 6),
};

impl ThemeColors {
    /// Palette for `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => GRUVBOX_DARK,
            Theme::GruvboxLight => GRUVBOX_LIGHT,
        }
    }
}
