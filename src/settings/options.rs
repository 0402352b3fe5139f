//! Option resolution for choice controls
//!
//! Computes the selectable entries of `theme`, `font` and `string` settings at
//! render time, along with which entry is pre-selected.

use once_cell::unsync::OnceCell;
use std::collections::BTreeSet;

use super::catalog::{ControlType, SettingDescriptor};
use super::host::ExtensionRegistry;
use super::snapshot::SettingValue;

/// Themes that ship with the editor
pub const BUILTIN_THEMES: &[&str] = &[
    "Default Dark+",
    "Default Light+",
    "Default High Contrast",
    "Default High Contrast Light",
    "Visual Studio Dark",
    "Visual Studio Light",
    "Abyss",
    "Kimbie Dark",
    "Monokai",
    "Monokai Dimmed",
    "Quiet Light",
    "Red",
    "Solarized Dark",
    "Solarized Light",
];

/// Font families offered for `font` settings, in display order
pub const FONT_FAMILIES: &[&str] = &[
    "Fira Code",
    "Cascadia Code",
    "JetBrains Mono",
    "Source Code Pro",
    "Monaco",
    "Menlo",
    "Consolas",
    "Courier New",
    "monospace",
];

/// Font selected when the configured family is empty
pub const DEFAULT_FONT: &str = "monospace";

/// Choices for `string` settings that don't declare their own
pub fn string_options_for(key: &str) -> Option<&'static [&'static str]> {
    let options: &'static [&'static str] = match key {
        "editor.wordWrap" => &["off", "on", "wordWrapColumn", "bounded"],
        "workbench.sideBar.location" => &["left", "right"],
        "editor.renderWhitespace" => &["none", "boundary", "selection", "trailing", "all"],
        "editor.cursorStyle" => &["line", "block", "underline"],
        "editor.lineNumbers" => &["off", "on", "relative"],
        "editor.cursorBlinking" => &["blink", "smooth", "phase", "expand", "solid"],
        "editor.guides.bracketPairs" => &["none", "active", "true"],
        "editor.multiCursorModifier" => &["ctrlCmd", "alt"],
        "editor.acceptSuggestionOnEnter" => &["on", "smart", "off"],
        "editor.suggestSelection" => &["first", "recentlyUsed", "recentlyUsedByPrefix"],
        "workbench.startupEditor" => &[
            "none",
            "welcomePage",
            "readme",
            "newUntitledFile",
            "welcomePageInEmptyWorkbench",
        ],
        "files.autoSave" => &["off", "afterDelay", "onFocusChange", "onWindowChange"],
        "files.eol" => &["\n", "\r\n", "auto"],
        "terminal.integrated.cursorStyle" => &["block", "line", "underline"],
        _ => return None,
    };
    Some(options)
}

/// The entries of a choice control and which one is pre-selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub items: Vec<String>,
    /// Index into `items`; `None` when the current value matches nothing
    pub selected: Option<usize>,
}

impl ResolvedOptions {
    /// Build from items, selecting the first entry equal to `current`
    pub fn with_current(items: Vec<String>, current: Option<&str>) -> Self {
        let selected = current.and_then(|current| items.iter().position(|item| item == current));
        Self { items, selected }
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|candidate| candidate == item)
    }
}

/// Reduce a font family list to the single name the font list can match.
///
/// `"'Fira Code', monospace"` becomes `Fira Code`. An absent or empty value
/// becomes [`DEFAULT_FONT`].
pub fn normalize_font(current: Option<&str>) -> String {
    let first = current
        .and_then(|value| value.split(',').next())
        .map(|family| family.trim().replace(['\'', '"'], ""))
        .unwrap_or_default();

    if first.is_empty() {
        DEFAULT_FONT.to_string()
    } else {
        first
    }
}

/// Merge built-in and discovered theme names.
///
/// The result is deduplicated, sorted lexicographically, and always contains
/// the current theme so the control never drops the active selection.
pub fn theme_options<I, S>(discovered: I, current: Option<&str>) -> ResolvedOptions
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: BTreeSet<String> = BUILTIN_THEMES.iter().map(|name| name.to_string()).collect();
    names.extend(discovered.into_iter().map(Into::into));

    if let Some(current) = current.filter(|current| !current.is_empty()) {
        names.insert(current.to_string());
    }

    ResolvedOptions::with_current(names.into_iter().collect(), current)
}

/// Resolves option lists for one render pass.
///
/// Extension discovery runs at most once per resolver, so a pass that renders
/// several theme settings queries the host once.
pub struct OptionResolver<'a> {
    extensions: &'a dyn ExtensionRegistry,
    discovered_themes: OnceCell<Vec<String>>,
}

impl<'a> OptionResolver<'a> {
    pub fn new(extensions: &'a dyn ExtensionRegistry) -> Self {
        Self {
            extensions,
            discovered_themes: OnceCell::new(),
        }
    }

    /// Options for a descriptor, or `None` for controls without a choice list
    pub fn resolve(
        &self,
        descriptor: &SettingDescriptor,
        current: &SettingValue,
    ) -> Option<ResolvedOptions> {
        match descriptor.control_type {
            ControlType::Theme => Some(theme_options(
                self.discovered_themes().iter().cloned(),
                current.as_text(),
            )),
            ControlType::Font => {
                let normalized = normalize_font(current.as_text());
                Some(ResolvedOptions::with_current(
                    FONT_FAMILIES.iter().map(|font| font.to_string()).collect(),
                    Some(&normalized),
                ))
            }
            ControlType::String => {
                let items: Vec<String> = match &descriptor.options {
                    Some(options) => options.clone(),
                    None => string_options_for(&descriptor.key)
                        .unwrap_or_default()
                        .iter()
                        .map(|option| option.to_string())
                        .collect(),
                };
                Some(ResolvedOptions::with_current(items, current.as_text()))
            }
            ControlType::Boolean | ControlType::Number | ControlType::Unsupported => None,
        }
    }

    /// Theme names contributed by installed extensions
    fn discovered_themes(&self) -> &[String] {
        self.discovered_themes.get_or_init(|| match self.extensions.extensions() {
            Ok(manifests) => {
                let themes: Vec<String> = manifests
                    .iter()
                    .flat_map(|manifest| manifest.themes())
                    .filter_map(|theme| theme.display_name())
                    .map(String::from)
                    .collect();
                tracing::debug!(
                    "Discovered {} themes from {} extensions",
                    themes.len(),
                    manifests.len()
                );
                themes
            }
            Err(e) => {
                tracing::warn!("Theme discovery failed, using built-in themes only: {}", e);
                Vec::new()
            }
        })
    }
}
