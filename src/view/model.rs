//! Structured panel view
//!
//! A deterministic mapping from a value snapshot to groups, rows and
//! controls. Both the terminal panel and the markup renderer draw from this
//! model, so the per-type control rules live in exactly one place.

use crate::settings::catalog::ControlType;
use crate::settings::options::ResolvedOptions;
use crate::settings::snapshot::{GroupSnapshot, RenderedSetting};

/// The whole panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub groups: Vec<GroupView>,
}

/// One collapsible section
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub title: String,
    pub rows: Vec<RowView>,
}

/// One setting: title, description and its control.
///
/// `key` identifies the configuration entry every event from this row's
/// control refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub key: String,
    pub title: String,
    pub description: String,
    /// `None` when the setting's type has no rendering rule
    pub control: Option<ControlView>,
}

/// Shape of a control
#[derive(Debug, Clone, PartialEq)]
pub enum ControlView {
    /// Binary toggle; emits a boolean
    Toggle { checked: bool },
    /// Numeric input pre-filled with the current value; emits a numeric string
    NumberInput { text: String },
    /// Single-select list; emits the chosen value
    Select { options: Vec<OptionView> },
}

impl ControlView {
    /// The option pre-selected in a choice list
    pub fn selected_option(&self) -> Option<&OptionView> {
        match self {
            ControlView::Select { options } => options.iter().find(|option| option.selected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// Value written to the store when chosen
    pub value: String,
    /// Text shown for the option
    pub label: String,
    pub selected: bool,
}

/// Printable label for an option value (`"\r\n"` is shown as `\r\n`)
pub fn option_label(value: &str) -> String {
    if value.chars().any(char::is_control) {
        value.escape_default().to_string()
    } else {
        value.to_string()
    }
}

/// Build the panel view for a snapshot
pub fn build_view(snapshot: &[GroupSnapshot]) -> PanelView {
    PanelView {
        groups: snapshot
            .iter()
            .map(|group| GroupView {
                title: group.title.clone(),
                rows: group.settings.iter().map(build_row).collect(),
            })
            .collect(),
    }
}

fn build_row(setting: &RenderedSetting) -> RowView {
    let control = match setting.descriptor.control_type {
        ControlType::Boolean => Some(toggle_control(setting)),
        ControlType::Number => Some(number_control(setting)),
        ControlType::String | ControlType::Theme | ControlType::Font => {
            Some(select_control(setting.options.as_ref()))
        }
        ControlType::Unsupported => {
            tracing::debug!(
                "No control for '{}': unsupported control type",
                setting.descriptor.key
            );
            None
        }
    };

    RowView {
        key: setting.descriptor.key.clone(),
        title: setting.descriptor.title.clone(),
        description: setting.descriptor.description.clone(),
        control,
    }
}

fn toggle_control(setting: &RenderedSetting) -> ControlView {
    ControlView::Toggle {
        checked: setting.value.is_truthy(),
    }
}

fn number_control(setting: &RenderedSetting) -> ControlView {
    ControlView::NumberInput {
        text: setting.value.input_text(),
    }
}

fn select_control(options: Option<&ResolvedOptions>) -> ControlView {
    let options = options
        .map(|resolved| {
            resolved
                .items
                .iter()
                .enumerate()
                .map(|(index, value)| OptionView {
                    value: value.clone(),
                    label: option_label(value),
                    selected: resolved.selected == Some(index),
                })
                .collect()
        })
        .unwrap_or_default();
    ControlView::Select { options }
}

/// Expanded/collapsed flag per group.
///
/// Transient UI state: every fresh panel starts fully expanded and nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: Vec<bool>,
}

impl CollapseState {
    /// All `group_count` groups expanded
    pub fn expanded(group_count: usize) -> Self {
        Self {
            collapsed: vec![false; group_count],
        }
    }

    pub fn is_collapsed(&self, group: usize) -> bool {
        self.collapsed.get(group).copied().unwrap_or(false)
    }

    /// Flip one group; the others are untouched
    pub fn toggle(&mut self, group: usize) {
        if let Some(flag) = self.collapsed.get_mut(group) {
            *flag = !*flag;
        }
    }
}
