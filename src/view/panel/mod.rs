//! Interactive terminal settings panel
//!
//! Holds one control state per row, built from a [`PanelView`]. Keyboard
//! input moves focus between group headers, rows and the footer link; control
//! changes surface as `PanelMessage`s for the sync controller.

mod input;
mod render;

use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

pub use input::PanelAction;
pub use render::{render_panel, CONTROL_WIDTH};

use super::controls::dropdown::{DropdownColors, DropdownState};
use super::controls::number_input::{NumberInputColors, NumberInputState};
use super::controls::toggle::{ToggleColors, ToggleState};
use super::controls::FocusState;
use super::model::{CollapseState, ControlView, PanelView};

/// Interactive state of one row's control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowControl {
    Toggle(ToggleState),
    Number(NumberInputState),
    Dropdown(DropdownState),
    /// The setting's type has no control
    Empty,
}

impl RowControl {
    fn from_view(control: Option<&ControlView>) -> Self {
        match control {
            Some(ControlView::Toggle { checked }) => Self::Toggle(ToggleState::new(*checked)),
            Some(ControlView::NumberInput { text }) => {
                Self::Number(NumberInputState::new(text.clone()))
            }
            Some(ControlView::Select { options }) => {
                let labels = options.iter().map(|o| o.label.clone()).collect();
                let values = options.iter().map(|o| o.value.clone()).collect();
                let selected = options.iter().position(|o| o.selected);
                Self::Dropdown(DropdownState::with_values(labels, values).with_selected(selected))
            }
            None => Self::Empty,
        }
    }

    fn set_focus(&mut self, focus: FocusState) {
        match self {
            Self::Toggle(state) => state.focus = focus,
            Self::Number(state) => state.focus = focus,
            Self::Dropdown(state) => state.focus = focus,
            Self::Empty => {}
        }
    }

    /// Lines of an open dropdown menu drawn below the row
    pub fn menu_height(&self) -> usize {
        match self {
            Self::Dropdown(state) => state.menu_height(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub key: String,
    pub title: String,
    pub description: String,
    pub control: RowControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelGroup {
    pub title: String,
    pub rows: Vec<PanelRow>,
}

/// What keyboard focus is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Group header (index into groups)
    Group(usize),
    /// Setting row (group index, row index)
    Row(usize, usize),
    /// The "Open settings.json" link
    Footer,
}

/// Last result shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Full panel state
#[derive(Debug, Clone)]
pub struct PanelState {
    pub groups: Vec<PanelGroup>,
    pub collapse: CollapseState,
    focus: FocusTarget,
    /// First visible line
    pub scroll_offset: usize,
    pub status: Option<StatusMessage>,
}

impl PanelState {
    /// A fresh panel: every group expanded, focus on the first header
    pub fn new(view: &PanelView) -> Self {
        let groups: Vec<PanelGroup> = view
            .groups
            .iter()
            .map(|group| PanelGroup {
                title: group.title.clone(),
                rows: group
                    .rows
                    .iter()
                    .map(|row| PanelRow {
                        key: row.key.clone(),
                        title: row.title.clone(),
                        description: row.description.clone(),
                        control: RowControl::from_view(row.control.as_ref()),
                    })
                    .collect(),
            })
            .collect();

        let focus = if groups.is_empty() {
            FocusTarget::Footer
        } else {
            FocusTarget::Group(0)
        };

        let mut state = Self {
            collapse: CollapseState::expanded(groups.len()),
            groups,
            focus,
            scroll_offset: 0,
            status: None,
        };
        state.sync_focus();
        state
    }

    /// Start over from freshly read values. Every group is expanded again;
    /// focus stays put if its target still exists.
    pub fn reload(&mut self, view: &PanelView) {
        let mut fresh = Self::new(view);
        if fresh.focus_targets().contains(&self.focus) {
            fresh.focus = self.focus;
        }
        fresh.scroll_offset = self.scroll_offset;
        fresh.status = self.status.take();
        fresh.sync_focus();
        *self = fresh;
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Focusable targets in display order. Rows of collapsed groups and rows
    /// without a control are skipped.
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = Vec::new();
        for (g, group) in self.groups.iter().enumerate() {
            targets.push(FocusTarget::Group(g));
            if self.collapse.is_collapsed(g) {
                continue;
            }
            for (r, row) in group.rows.iter().enumerate() {
                if row.control != RowControl::Empty {
                    targets.push(FocusTarget::Row(g, r));
                }
            }
        }
        targets.push(FocusTarget::Footer);
        targets
    }

    /// Move focus by `delta` targets, clamped to the ends
    pub fn move_focus(&mut self, delta: isize) {
        let targets = self.focus_targets();
        let current = targets.iter().position(|t| *t == self.focus).unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(targets.len().saturating_sub(1));
        self.set_focus(targets[next]);
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
        self.sync_focus();
    }

    /// Collapse or expand one group
    pub fn toggle_group(&mut self, group: usize) {
        self.collapse.toggle(group);
        if let FocusTarget::Row(g, _) = self.focus {
            if g == group && self.collapse.is_collapsed(group) {
                self.focus = FocusTarget::Group(group);
            }
        }
        self.sync_focus();
    }

    pub fn focused_row(&self) -> Option<&PanelRow> {
        match self.focus {
            FocusTarget::Row(g, r) => self.groups.get(g)?.rows.get(r),
            _ => None,
        }
    }

    pub(crate) fn focused_row_mut(&mut self) -> Option<&mut PanelRow> {
        match self.focus {
            FocusTarget::Row(g, r) => self.groups.get_mut(g)?.rows.get_mut(r),
            _ => None,
        }
    }

    /// Look up a row by setting key
    pub fn row(&self, key: &str) -> Option<&PanelRow> {
        self.groups
            .iter()
            .flat_map(|group| group.rows.iter())
            .find(|row| row.key == key)
    }

    /// Push the focus target down into the control states
    fn sync_focus(&mut self) {
        let focus = self.focus;
        for (g, group) in self.groups.iter_mut().enumerate() {
            for (r, row) in group.rows.iter_mut().enumerate() {
                let state = if focus == FocusTarget::Row(g, r) {
                    FocusState::Focused
                } else {
                    FocusState::Normal
                };
                row.control.set_focus(state);
            }
        }
    }
}

/// Colors for the whole panel
#[derive(Debug, Clone, Copy)]
pub struct PanelColors {
    pub header: Color,
    pub title: Color,
    pub description: Color,
    pub link: Color,
    /// Background of the focused line
    pub focused_bg: Color,
    pub info: Color,
    pub error: Color,
    pub toggle: ToggleColors,
    pub dropdown: DropdownColors,
    pub number: NumberInputColors,
}

impl Default for PanelColors {
    fn default() -> Self {
        Self {
            header: Color::LightBlue,
            title: Color::White,
            description: Color::Gray,
            link: Color::Cyan,
            focused_bg: Color::Rgb(40, 44, 52),
            info: Color::Green,
            error: Color::Red,
            toggle: ToggleColors::default(),
            dropdown: DropdownColors::default(),
            number: NumberInputColors::default(),
        }
    }
}

/// Cut `text` to at most `width` columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}
