//! Number input keyboard handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{FocusState, NumberInputState};

/// Events returned from number input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberInputEvent {
    StartedEditing,
    /// Buffer edited
    Edited,
    /// Editing finished with a new value
    Committed(String),
    /// Editing finished without a change
    Cancelled,
}

impl NumberInputState {
    /// Handle a key while focused or editing
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NumberInputEvent> {
        if !self.editing() {
            if self.focus != FocusState::Focused {
                return None;
            }
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.start_editing();
                    Some(NumberInputEvent::StartedEditing)
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
                    self.start_editing();
                    self.insert_char(c);
                    Some(NumberInputEvent::StartedEditing)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter | KeyCode::Tab => match self.confirm_editing() {
                Some(text) => Some(NumberInputEvent::Committed(text)),
                None => Some(NumberInputEvent::Cancelled),
            },
            KeyCode::Esc => {
                self.cancel_editing();
                Some(NumberInputEvent::Cancelled)
            }
            KeyCode::Backspace => {
                self.backspace();
                Some(NumberInputEvent::Edited)
            }
            KeyCode::Char(c) => {
                self.insert_char(c);
                Some(NumberInputEvent::Edited)
            }
            _ => Some(NumberInputEvent::Edited),
        }
    }
}
