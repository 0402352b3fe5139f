//! Number input control
//!
//! Renders as `[ 14        ]`. Editing works on a text buffer holding a decimal
//! number, including fractions like `1.5`; only text that parses as a number
//! is committed, and it is coerced to a JSON number on write.

mod input;
mod render;

use ratatui::style::Color;

pub use input::NumberInputEvent;
pub use render::render_number_input;

use super::FocusState;

/// State for a number input control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInputState {
    /// Committed text
    pub text: String,
    pub focus: FocusState,
    /// Edit buffer (None when not editing)
    pub editor: Option<String>,
}

impl NumberInputState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focus: FocusState::Normal,
            editor: None,
        }
    }

    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Start editing with an empty buffer so typing replaces the value
    pub fn start_editing(&mut self) {
        self.editor = Some(String::new());
    }

    pub fn cancel_editing(&mut self) {
        self.editor = None;
    }

    /// Commit the buffer. Returns the new text if it changed; an empty
    /// buffer or one that isn't a number (`-`, `.`) keeps the old value.
    pub fn confirm_editing(&mut self) -> Option<String> {
        let buffer = self.editor.take()?;
        if buffer == self.text || buffer.parse::<f64>().is_err() {
            return None;
        }
        self.text = buffer;
        Some(self.text.clone())
    }

    /// Insert a character while editing. Digits are always accepted, a
    /// minus sign only first, and a single decimal point.
    pub fn insert_char(&mut self, c: char) {
        if let Some(buffer) = &mut self.editor {
            let accepted = match c {
                '0'..='9' => true,
                '-' => buffer.is_empty(),
                '.' => !buffer.contains('.'),
                _ => false,
            };
            if accepted {
                buffer.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = &mut self.editor {
            buffer.pop();
        }
    }

    /// Text to display: the buffer while editing, the committed text otherwise
    pub fn display_text(&self) -> &str {
        self.editor.as_deref().unwrap_or(&self.text)
    }
}

/// Colors for the number input control
#[derive(Debug, Clone, Copy)]
pub struct NumberInputColors {
    /// Value text color
    pub value: Color,
    /// Bracket color
    pub border: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Background while editing
    pub editing_bg: Color,
}

impl Default for NumberInputColors {
    fn default() -> Self {
        Self {
            value: Color::Yellow,
            border: Color::Gray,
            focused: Color::Cyan,
            editing_bg: Color::DarkGray,
        }
    }
}
