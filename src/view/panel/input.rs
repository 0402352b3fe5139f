//! Panel keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{FocusTarget, PanelState, RowControl};
use crate::settings::message::{PanelMessage, RawValue};
use crate::view::controls::dropdown::DropdownEvent;
use crate::view::controls::number_input::NumberInputEvent;
use crate::view::controls::toggle::ToggleEvent;

/// What the app loop should do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    None,
    /// Hand a message to the sync controller
    Send(PanelMessage),
    /// Re-read every value from the store
    Refresh,
    Quit,
}

impl PanelState {
    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> PanelAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PanelAction::Quit;
        }

        // An open menu or edit buffer gets every key first
        if let Some(action) = self.handle_control_key(key) {
            return action;
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.move_focus(-1);
                PanelAction::None
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.move_focus(1);
                PanelAction::None
            }
            KeyCode::PageUp => {
                self.move_focus(-10);
                PanelAction::None
            }
            KeyCode::PageDown => {
                self.move_focus(10);
                PanelAction::None
            }
            KeyCode::Home => {
                self.move_focus(isize::MIN);
                PanelAction::None
            }
            KeyCode::End => {
                self.move_focus(isize::MAX);
                PanelAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('o') => PanelAction::Send(PanelMessage::OpenSettings),
            KeyCode::Char('r') => PanelAction::Refresh,
            KeyCode::Char('q') | KeyCode::Esc => PanelAction::Quit,
            _ => PanelAction::None,
        }
    }

    /// Give the focused control a chance to consume the key
    fn handle_control_key(&mut self, key: KeyEvent) -> Option<PanelAction> {
        let row = self.focused_row_mut()?;
        let setting = row.key.clone();

        match &mut row.control {
            RowControl::Toggle(toggle) => match toggle.handle_key(key)? {
                ToggleEvent::Toggled(checked) => Some(update(setting, RawValue::Bool(checked))),
            },
            RowControl::Number(number) => match number.handle_key(key)? {
                NumberInputEvent::Committed(text) => Some(update(setting, RawValue::Text(text))),
                _ => Some(PanelAction::None),
            },
            RowControl::Dropdown(dropdown) => {
                let event = dropdown.handle_key(key)?;
                match event {
                    DropdownEvent::Changed(_) => {
                        let value = dropdown.selected_value()?.to_string();
                        Some(update(setting, RawValue::Text(value)))
                    }
                    _ => Some(PanelAction::None),
                }
            }
            RowControl::Empty => None,
        }
    }

    /// Enter/Space on a header or the footer
    fn activate(&mut self) -> PanelAction {
        match self.focus() {
            FocusTarget::Group(group) => {
                self.toggle_group(group);
                PanelAction::None
            }
            FocusTarget::Footer => PanelAction::Send(PanelMessage::OpenSettings),
            FocusTarget::Row(..) => PanelAction::None,
        }
    }
}

fn update(setting: String, value: RawValue) -> PanelAction {
    PanelAction::Send(PanelMessage::update(setting, value))
}
