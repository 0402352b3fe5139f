//! Toggle input handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{FocusState, ToggleState};

/// Events returned from toggle input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Value changed; carries the new value
    Toggled(bool),
}

impl ToggleState {
    /// Handle a key while focused; Enter and Space flip the value
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ToggleEvent> {
        if self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle();
                Some(ToggleEvent::Toggled(self.checked))
            }
            _ => None,
        }
    }
}
