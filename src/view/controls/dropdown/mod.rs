//! Dropdown selection control for choice settings
//!
//! Closed it renders as `[Selected ▼]`; open, the option list is drawn below
//! the row with the highlighted option marked.

mod input;
mod render;

use ratatui::style::Color;

pub use input::DropdownEvent;
pub use render::{render_dropdown, render_dropdown_menu};

use super::FocusState;

/// Rows the option menu shows before scrolling
pub const MAX_VISIBLE_OPTIONS: usize = 8;

/// State for a dropdown control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownState {
    /// Currently selected index; `None` when the current value isn't listed
    pub selected: Option<usize>,
    /// Display names for options
    pub options: Vec<String>,
    /// Values written to the store, parallel to `options`
    pub values: Vec<String>,
    /// Whether the menu is open
    pub open: bool,
    pub focus: FocusState,
    /// Selection when the menu opened, restored on cancel
    original_selected: Option<Option<usize>>,
    /// First option shown in the menu
    pub scroll_offset: usize,
    pub max_visible: usize,
}

impl DropdownState {
    /// Create a dropdown where display names equal values
    pub fn new(options: Vec<String>) -> Self {
        Self::with_values(options.clone(), options)
    }

    /// Create a dropdown with separate display names and values
    pub fn with_values(options: Vec<String>, values: Vec<String>) -> Self {
        debug_assert_eq!(options.len(), values.len());
        Self {
            selected: None,
            options,
            values,
            open: false,
            focus: FocusState::Normal,
            original_selected: None,
            scroll_offset: 0,
            max_visible: MAX_VISIBLE_OPTIONS,
        }
    }

    /// Set the initially selected index
    pub fn with_selected(mut self, index: Option<usize>) -> Self {
        self.selected = index.filter(|i| *i < self.options.len());
        self.ensure_visible();
        self
    }

    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Value of the selected option
    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Display name of the selected option
    pub fn selected_option(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Open the menu; an empty dropdown never opens
    pub fn open_menu(&mut self) -> bool {
        if self.options.is_empty() {
            return false;
        }
        self.original_selected = Some(self.selected);
        self.open = true;
        self.ensure_visible();
        true
    }

    /// Restore the selection from when the menu opened and close
    pub fn cancel(&mut self) {
        if let Some(original) = self.original_selected.take() {
            self.selected = original;
        }
        self.open = false;
        self.ensure_visible();
    }

    /// Close, keeping the highlighted option. Returns true if the
    /// selection differs from when the menu opened.
    pub fn confirm(&mut self) -> bool {
        let changed = self
            .original_selected
            .take()
            .is_some_and(|original| original != self.selected);
        self.open = false;
        changed
    }

    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
        self.ensure_visible();
    }

    pub fn select_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
        self.ensure_visible();
    }

    /// Keep the selected option inside the visible menu window
    pub fn ensure_visible(&mut self) {
        if self.max_visible == 0 || self.options.len() <= self.max_visible {
            self.scroll_offset = 0;
            return;
        }

        let selected = self.selected.unwrap_or(0);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + self.max_visible {
            self.scroll_offset = selected + 1 - self.max_visible;
        }
    }

    /// Rows the open menu occupies below the control
    pub fn menu_height(&self) -> usize {
        if self.open {
            self.options.len().min(self.max_visible)
        } else {
            0
        }
    }
}

/// Colors for the dropdown control
#[derive(Debug, Clone, Copy)]
pub struct DropdownColors {
    /// Selected option text color
    pub selected: Color,
    /// Bracket color
    pub border: Color,
    /// Arrow indicator color
    pub arrow: Color,
    /// Option text in the open menu
    pub option: Color,
    /// Highlighted option background
    pub highlight_bg: Color,
    /// Focused foreground color
    pub focused: Color,
    /// Placeholder shown when nothing is selected
    pub placeholder: Color,
}

impl Default for DropdownColors {
    fn default() -> Self {
        Self {
            selected: Color::White,
            border: Color::Gray,
            arrow: Color::DarkGray,
            option: Color::White,
            highlight_bg: Color::DarkGray,
            focused: Color::Cyan,
            placeholder: Color::DarkGray,
        }
    }
}
