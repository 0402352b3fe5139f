//! Toggle (checkbox) control for boolean settings
//!
//! Renders as `[x]` or `[ ]` in the control column.

mod input;
mod render;

use ratatui::style::Color;

pub use input::ToggleEvent;
pub use render::render_toggle;

use super::FocusState;

/// State for a toggle control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleState {
    pub checked: bool,
    pub focus: FocusState,
}

impl ToggleState {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            focus: FocusState::Normal,
        }
    }

    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Flip the value
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// Colors for the toggle control
#[derive(Debug, Clone, Copy)]
pub struct ToggleColors {
    /// Checkbox bracket color
    pub bracket: Color,
    /// Checkmark color when checked
    pub checkmark: Color,
    /// Focused highlight color
    pub focused: Color,
}

impl Default for ToggleColors {
    fn default() -> Self {
        Self {
            bracket: Color::Gray,
            checkmark: Color::Green,
            focused: Color::Cyan,
        }
    }
}
