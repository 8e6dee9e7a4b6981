//! Location input field.
//!
//! Focusing the field selects its whole content, so the first keystroke
//! replaces the previous location instead of appending to it.

pub mod ui;

use unicode_width::UnicodeWidthStr;

/// Location input state.
#[derive(Debug, Default)]
pub struct LocationInput {
    is_active: bool,
    buffer: String,
    selected: bool,
}

impl LocationInput {
    /// Create an inactive input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the input has focus.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Give the input focus, starting from `current` with everything selected.
    pub fn focus(&mut self, current: &str) {
        self.is_active = true;
        self.buffer = current.to_string();
        self.selected = !self.buffer.is_empty();
    }

    /// Type a character.
    pub fn input(&mut self, c: char) {
        if self.selected {
            self.buffer.clear();
            self.selected = false;
        }
        self.buffer.push(c);
    }

    /// Delete backwards; clears everything while selected.
    pub fn backspace(&mut self) {
        if self.selected {
            self.buffer.clear();
            self.selected = false;
        } else {
            self.buffer.pop();
        }
    }

    /// Drop the selection, keeping the text.
    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Leave the input and return the entered text.
    pub fn commit(&mut self) -> String {
        self.is_active = false;
        self.selected = false;
        std::mem::take(&mut self.buffer)
    }

    /// Leave the input, discarding the edit.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.selected = false;
        self.buffer.clear();
    }

    /// Get the edit buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether the whole buffer is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Display width of the buffer, for cursor placement.
    pub fn cursor_offset(&self) -> u16 {
        u16::try_from(self.buffer.width()).unwrap_or(u16::MAX)
    }
}
