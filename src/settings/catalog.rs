//! Setting descriptor catalog
//!
//! The catalog is the static list of settings the panel exposes, grouped the
//! way they are shown. Every other component is generic over its contents,
//! so adding a setting here needs no change to rendering or sync logic.
//!
//! The built-in catalog can be extended at startup with a JSON file of the
//! same shape (see [`CatalogFile`]).

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::error::SettingsError;

/// Key of the color theme setting, which has its own write path.
pub const COLOR_THEME_KEY: &str = "workbench.colorTheme";

/// How a setting is displayed and how its raw change value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Boolean,
    Number,
    String,
    Theme,
    Font,
    /// A type named in a catalog file that this build does not know.
    /// Rendered as an empty control.
    #[serde(other)]
    Unsupported,
}

impl ControlType {
    /// Whether the control is a choice list with resolved options
    pub fn is_choice(self) -> bool {
        matches!(self, Self::String | Self::Theme | Self::Font)
    }
}

/// Static metadata for one setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SettingDescriptor {
    /// Dotted configuration key, e.g. `editor.fontSize`
    #[serde(rename = "id")]
    pub key: String,
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Inline choices for `string` settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl SettingDescriptor {
    pub fn new(
        key: impl Into<String>,
        control_type: ControlType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            control_type,
            title: title.into(),
            description: description.into(),
            options: None,
        }
    }

    /// Attach inline choices
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|s| s.to_string()).collect());
        self
    }
}

/// A titled, ordered collection of settings rendered as one section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SettingGroup {
    pub title: String,
    pub settings: Vec<SettingDescriptor>,
}

/// On-disk format of a catalog extension file
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogFile {
    pub groups: Vec<SettingGroup>,
}

/// Ordered, immutable set of setting groups
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    groups: Vec<SettingGroup>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    groups: builtin_groups(),
});

impl Catalog {
    /// The built-in catalog shared by the whole process
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from explicit groups.
    ///
    /// Later declarations of an already-declared key are dropped so that
    /// every key maps to exactly one control.
    pub fn from_groups(groups: Vec<SettingGroup>) -> Self {
        let mut catalog = Self { groups: Vec::new() };
        catalog.append(groups);
        catalog
    }

    /// Parse a catalog file
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from_groups(file.groups))
    }

    /// The built-in catalog followed by the groups of a catalog file
    pub fn builtin_with_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::Catalog(format!("{}: {}", path.display(), e))
        })?;
        let file: CatalogFile = serde_json::from_str(&content)
            .map_err(|e| SettingsError::Catalog(format!("{}: {}", path.display(), e)))?;

        let mut catalog = Self::builtin().clone();
        catalog.append(file.groups);
        tracing::info!(
            "Loaded catalog extension {} ({} settings total)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    fn append(&mut self, groups: Vec<SettingGroup>) {
        let mut seen: HashSet<String> = self
            .descriptors()
            .map(|descriptor| descriptor.key.clone())
            .collect();

        for mut group in groups {
            group.settings.retain(|descriptor| {
                let fresh = seen.insert(descriptor.key.clone());
                if !fresh {
                    tracing::warn!("Duplicate setting '{}' ignored", descriptor.key);
                }
                fresh
            });
            self.groups.push(group);
        }
    }

    pub fn groups(&self) -> &[SettingGroup] {
        &self.groups
    }

    /// All descriptors in display order
    pub fn descriptors(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.groups.iter().flat_map(|group| group.settings.iter())
    }

    /// Find the descriptor for a key
    pub fn descriptor(&self, key: &str) -> Option<&SettingDescriptor> {
        self.descriptors().find(|descriptor| descriptor.key == key)
    }

    /// Number of settings across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.settings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn builtin_groups() -> Vec<SettingGroup> {
    use ControlType::{Boolean, Font, Number, String as Text, Theme};
    let s = SettingDescriptor::new;

    vec![
        SettingGroup {
            title: "Editor Appearance".into(),
            settings: vec![
                s(COLOR_THEME_KEY, Theme, "Color Theme", "Specifies the color theme used in the workbench"),
                s("editor.renderWhitespace", Text, "Show Whitespace", "Controls how whitespace characters are rendered"),
                s("editor.fontSize", Number, "Font Size", "Controls the font size in pixels"),
                s("editor.fontFamily", Font, "Font Family", "Select the font family for the editor"),
                s("editor.fontLigatures", Boolean, "Font Ligatures", "Enables/disables font ligatures"),
                s("editor.minimap.enabled", Boolean, "Minimap", "Shows a miniature view of the file on the right side"),
                s("editor.bracketPairColorization.enabled", Boolean, "Bracket Pair Colors", "Enables bracket pair colorization"),
                s("editor.guides.bracketPairs", Text, "Bracket Guides", "Controls bracket pair guides")
                    .with_options(&["none", "active", "true"]),
                s("editor.guides.indentation", Boolean, "Indent Guides", "Highlights indentation levels"),
                s("editor.cursorBlinking", Text, "Cursor Blinking", "Controls cursor animation style")
                    .with_options(&["blink", "smooth", "phase", "expand", "solid"]),
                s("editor.cursorWidth", Number, "Cursor Width", "Controls the width of the cursor"),
                s("editor.lineHeight", Number, "Line Height", "Controls line height in pixels"),
                s("workbench.tree.indent", Number, "Tree Indent", "Controls tree indentation in pixels"),
            ],
        },
        SettingGroup {
            title: "Editor Behavior".into(),
            settings: vec![
                s("editor.formatOnSave", Boolean, "Format on Save", "Automatically format the file when saving"),
                s("editor.formatOnPaste", Boolean, "Format on Paste", "Automatically format pasted content"),
                s("editor.formatOnType", Boolean, "Format on Type", "Automatically format while typing"),
                s("editor.tabSize", Number, "Tab Size", "Number of spaces a tab is equal to"),
                s("editor.insertSpaces", Boolean, "Insert Spaces", "Insert spaces when pressing Tab"),
                s("editor.detectIndentation", Boolean, "Detect Indentation", "Controls whether indentation is detected automatically"),
                s("editor.wordWrap", Text, "Word Wrap", "Controls how lines should wrap"),
                s("editor.cursorStyle", Text, "Cursor Style", "Controls the cursor animation style"),
                s("editor.multiCursorModifier", Text, "Multi Cursor Modifier", "Modifier key for adding multiple cursors")
                    .with_options(&["ctrlCmd", "alt"]),
                s("editor.acceptSuggestionOnEnter", Text, "Accept Suggestion on Enter", "Controls whether suggestions are accepted on Enter")
                    .with_options(&["on", "smart", "off"]),
                s("editor.suggestSelection", Text, "Suggest Selection", "Controls how suggestions are pre-selected")
                    .with_options(&["first", "recentlyUsed", "recentlyUsedByPrefix"]),
                s("editor.quickSuggestionsDelay", Number, "Suggestion Delay", "Controls the delay in ms after which quick suggestions will show"),
                s("editor.dragAndDrop", Boolean, "Drag and Drop", "Controls whether drag and drop of files is enabled"),
            ],
        },
        SettingGroup {
            title: "Workbench".into(),
            settings: vec![
                s("workbench.sideBar.location", Text, "Sidebar Location", "Controls the location of the sidebar"),
                s("workbench.editor.enablePreview", Boolean, "Enable Preview Editors", "Controls whether opened editors show as preview"),
                s("workbench.editor.enablePreviewFromQuickOpen", Boolean, "Quick Open Preview", "Controls whether Quick Open editors show as preview"),
                s("workbench.editor.closeEmptyGroups", Boolean, "Close Empty Groups", "Controls whether empty editor groups should close automatically"),
                s("workbench.startupEditor", Text, "Startup Editor", "Controls which editor is shown at startup")
                    .with_options(&["none", "welcomePage", "readme", "newUntitledFile", "welcomePageInEmptyWorkbench"]),
                s("workbench.commandPalette.history", Number, "Command History", "Controls number of recently used commands to keep in history"),
            ],
        },
        SettingGroup {
            title: "Files".into(),
            settings: vec![
                s("files.autoSave", Text, "Auto Save", "Controls auto save of editors")
                    .with_options(&["off", "afterDelay", "onFocusChange", "onWindowChange"]),
                s("files.autoSaveDelay", Number, "Auto Save Delay", "Controls the delay in ms after which a file is auto saved"),
                s("files.eol", Text, "End of Line", "The default end of line character")
                    .with_options(&["\n", "\r\n", "auto"]),
                s("files.trimTrailingWhitespace", Boolean, "Trim Trailing Whitespace", "Removes trailing whitespace when saving a file"),
                s("files.insertFinalNewline", Boolean, "Insert Final Newline", "Inserts a final newline when saving a file"),
                s("files.trimFinalNewlines", Boolean, "Trim Final Newlines", "Removes multiple final newlines when saving a file"),
            ],
        },
        SettingGroup {
            title: "Terminal".into(),
            settings: vec![
                s("terminal.integrated.fontSize", Number, "Font Size", "Controls the font size in pixels of the terminal"),
                s("terminal.integrated.lineHeight", Number, "Line Height", "Controls the line height of the terminal"),
                s("terminal.integrated.cursorBlinking", Boolean, "Cursor Blinking", "Controls whether the terminal cursor blinks"),
                s("terminal.integrated.cursorStyle", Text, "Cursor Style", "Controls the style of terminal cursor")
                    .with_options(&["block", "line", "underline"]),
                s("terminal.integrated.scrollback", Number, "Scrollback", "Controls the maximum number of lines the terminal keeps in its buffer"),
            ],
        },
        SettingGroup {
            title: "Extensions".into(),
            settings: vec![
                s("extensions.autoUpdate", Boolean, "Auto Update Extensions", "Automatically update extensions"),
                s("extensions.autoCheckUpdates", Boolean, "Auto Check Updates", "Automatically check for extension updates"),
                s("extensions.ignoreRecommendations", Boolean, "Ignore Recommendations", "Controls whether to ignore extension recommendations"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_group_order_and_sizes() {
        let catalog = Catalog::builtin();
        let summary: Vec<(&str, usize)> = catalog
            .groups()
            .iter()
            .map(|g| (g.title.as_str(), g.settings.len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Editor Appearance", 13),
                ("Editor Behavior", 13),
                ("Workbench", 6),
                ("Files", 6),
                ("Terminal", 5),
                ("Extensions", 3),
            ]
        );
        assert_eq!(catalog.len(), 46);
    }

    #[test]
    fn test_builtin_keys_are_unique() {
        let catalog = Catalog::builtin();
        let keys: HashSet<&str> = catalog.descriptors().map(|d| d.key.as_str()).collect();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn test_descriptor_lookup() {
        let catalog = Catalog::builtin();
        let theme = catalog.descriptor(COLOR_THEME_KEY).unwrap();
        assert_eq!(theme.control_type, ControlType::Theme);
        assert_eq!(catalog.groups()[0].settings[0].key, COLOR_THEME_KEY);
        assert!(catalog.descriptor("editor.lineNumbers").is_none());
    }

    #[test]
    fn test_catalog_file_parsing() {
        let json = r#"{
            "groups": [{
                "title": "Custom",
                "settings": [
                    {"id": "editor.lineNumbers", "type": "string", "title": "Line Numbers"},
                    {"id": "editor.smoothScrolling", "type": "boolean", "title": "Smooth", "description": "Animate scrolling"},
                    {"id": "editor.rulers", "type": "array", "title": "Rulers"}
                ]
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let settings = &catalog.groups()[0].settings;
        assert_eq!(settings.len(), 3);
        assert_eq!(settings[0].control_type, ControlType::String);
        assert_eq!(settings[0].description, "");
        assert_eq!(settings[1].control_type, ControlType::Boolean);
        assert_eq!(settings[2].control_type, ControlType::Unsupported);
    }

    #[test]
    fn test_duplicate_keys_keep_first_declaration() {
        let groups = vec![
            SettingGroup {
                title: "A".into(),
                settings: vec![SettingDescriptor::new("x.y", ControlType::Boolean, "First", "")],
            },
            SettingGroup {
                title: "B".into(),
                settings: vec![
                    SettingDescriptor::new("x.y", ControlType::Number, "Second", ""),
                    SettingDescriptor::new("x.z", ControlType::Number, "Third", ""),
                ],
            },
        ];
        let catalog = Catalog::from_groups(groups);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.descriptor("x.y").unwrap().title, "First");
        assert_eq!(catalog.groups()[1].settings[0].key, "x.z");
    }

    #[test]
    fn test_builtin_with_file_appends_groups() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"groups":[{"title":"Extra","settings":[
                {"id":"editor.fontSize","type":"number","title":"Dup"},
                {"id":"editor.stickyScroll.enabled","type":"boolean","title":"Sticky Scroll"}
            ]}]}"#,
        )
        .unwrap();

        let catalog = Catalog::builtin_with_file(file.path()).unwrap();
        assert_eq!(catalog.groups().len(), 7);
        assert_eq!(catalog.groups()[6].settings.len(), 1);
        assert_eq!(catalog.len(), 47);
    }

    #[test]
    fn test_builtin_with_missing_file_is_catalog_error() {
        let err = Catalog::builtin_with_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Catalog(_)));
    }
}
