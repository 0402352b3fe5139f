//! Dropdown input handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{DropdownState, FocusState};

/// Events returned from dropdown input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    Opened,
    /// Closed with a different option than when it opened
    Changed(usize),
    /// Closed with the original option
    Closed,
    /// Closed with the original option restored
    Cancelled,
    /// Highlight moved while open
    Highlighted(usize),
}

impl DropdownState {
    /// Handle a key while focused or open
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DropdownEvent> {
        if self.focus != FocusState::Focused && !self.open {
            return None;
        }

        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open_menu().then_some(DropdownEvent::Opened)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.confirm() {
                    self.selected.map(DropdownEvent::Changed)
                } else {
                    Some(DropdownEvent::Closed)
                }
            }
            KeyCode::Esc => {
                self.cancel();
                Some(DropdownEvent::Cancelled)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                self.selected.map(DropdownEvent::Highlighted)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                self.selected.map(DropdownEvent::Highlighted)
            }
            KeyCode::Home => {
                self.selected = Some(0);
                self.ensure_visible();
                Some(DropdownEvent::Highlighted(0))
            }
            KeyCode::End => {
                let last = self.options.len() - 1;
                self.selected = Some(last);
                self.ensure_visible();
                Some(DropdownEvent::Highlighted(last))
            }
            // Swallow everything else so the panel doesn't move focus under an open menu
            _ => Some(DropdownEvent::Highlighted(self.selected.unwrap_or(0))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn focused(selected: Option<usize>) -> DropdownState {
        DropdownState::new(vec!["a".into(), "b".into(), "c".into()])
            .with_selected(selected)
            .with_focus(FocusState::Focused)
    }

    #[test]
    fn test_open_navigate_confirm() {
        let mut state = focused(Some(0));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(DropdownEvent::Opened));
        assert_eq!(state.handle_key(key(KeyCode::Down)), Some(DropdownEvent::Highlighted(1)));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(DropdownEvent::Changed(1)));
        assert!(!state.open);
        assert_eq!(state.selected_value(), Some("b"));
    }

    #[test]
    fn test_confirm_unchanged_is_closed() {
        let mut state = focused(Some(2));
        state.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(DropdownEvent::Closed));
    }

    #[test]
    fn test_escape_cancels() {
        let mut state = focused(None);
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::End));
        assert_eq!(state.handle_key(key(KeyCode::Esc)), Some(DropdownEvent::Cancelled));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_first_choice_from_unset_is_a_change() {
        let mut state = focused(None);
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(DropdownEvent::Changed(0)));
    }

    #[test]
    fn test_unfocused_closed_ignores_keys() {
        let mut state = DropdownState::new(vec!["a".into()]);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_closed_arrows_are_not_consumed() {
        let mut state = focused(Some(0));
        assert_eq!(state.handle_key(key(KeyCode::Down)), None);
        assert_eq!(state.selected, Some(0));
    }
}
