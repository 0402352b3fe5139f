//! JSON settings file store.
//!
//! Implements [`ConfigurationStore`] over a user `settings.json` file with
//! flat dotted keys (`"editor.fontSize": 14`). The file is the source of
//! truth: every read goes back to disk, and every write rewrites the file
//! with only the changed key touched.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::settings::error::SettingsError;
use crate::settings::host::{ConfigTarget, ConfigurationStore};

// ============================================================================
// Defaults
// ============================================================================

/// Value a key reads as when the settings file doesn't set it.
pub fn default_value(key: &str) -> Option<Value> {
    use serde_json::json;

    let value = match key {
        "workbench.colorTheme" => json!("Default Dark+"),
        "editor.renderWhitespace" => json!("selection"),
        "editor.fontSize" => json!(14),
        "editor.fontFamily" => json!("Consolas, 'Courier New', monospace"),
        "editor.fontLigatures" => json!(false),
        "editor.minimap.enabled" => json!(true),
        "editor.bracketPairColorization.enabled" => json!(true),
        "editor.guides.bracketPairs" => json!(false),
        "editor.guides.indentation" => json!(true),
        "editor.cursorBlinking" => json!("blink"),
        "editor.cursorWidth" => json!(0),
        "editor.lineHeight" => json!(0),
        "editor.lineNumbers" => json!("on"),
        "workbench.tree.indent" => json!(8),
        "editor.formatOnSave" => json!(false),
        "editor.formatOnPaste" => json!(false),
        "editor.formatOnType" => json!(false),
        "editor.tabSize" => json!(4),
        "editor.insertSpaces" => json!(true),
        "editor.detectIndentation" => json!(true),
        "editor.wordWrap" => json!("off"),
        "editor.cursorStyle" => json!("line"),
        "editor.multiCursorModifier" => json!("alt"),
        "editor.acceptSuggestionOnEnter" => json!("on"),
        "editor.suggestSelection" => json!("first"),
        "editor.quickSuggestionsDelay" => json!(10),
        "editor.dragAndDrop" => json!(true),
        "workbench.sideBar.location" => json!("left"),
        "workbench.editor.enablePreview" => json!(true),
        "workbench.editor.enablePreviewFromQuickOpen" => json!(false),
        "workbench.editor.closeEmptyGroups" => json!(true),
        "workbench.startupEditor" => json!("welcomePage"),
        "workbench.commandPalette.history" => json!(50),
        "files.autoSave" => json!("off"),
        "files.autoSaveDelay" => json!(1000),
        "files.eol" => json!("auto"),
        "files.trimTrailingWhitespace" => json!(false),
        "files.insertFinalNewline" => json!(false),
        "files.trimFinalNewlines" => json!(false),
        "terminal.integrated.fontSize" => json!(14),
        "terminal.integrated.lineHeight" => json!(1),
        "terminal.integrated.cursorBlinking" => json!(false),
        "terminal.integrated.cursorStyle" => json!("block"),
        "terminal.integrated.scrollback" => json!(1000),
        "extensions.autoUpdate" => json!(true),
        "extensions.autoCheckUpdates" => json!(true),
        "extensions.ignoreRecommendations" => json!(false),
        _ => return None,
    };
    Some(value)
}

// ============================================================================
// JSON Utilities
// ============================================================================

/// Look up a dotted key.
///
/// A flat top-level entry wins; otherwise the key is followed through nested
/// objects (`{"editor": {"fontSize": 12}}`).
pub fn get_dotted<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    let map = root.as_object()?;
    if let Some(value) = map.get(key) {
        return Some(value);
    }

    let mut current = root;
    for part in key.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Serialize with four-space indentation and a trailing newline
fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    let mut text = String::from_utf8_lossy(&out).into_owned();
    text.push('\n');
    Ok(text)
}

// ============================================================================
// Store
// ============================================================================

/// User settings file backed by the filesystem
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the settings file; a missing or blank file is an empty object.
    fn load(&self) -> Result<Value, String> {
        if !self.path.exists() {
            return Ok(Value::Object(Map::new()));
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("{}: {}", self.path.display(), e))?;
        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| format!("{}: {}", self.path.display(), e))?;
        if !value.is_object() {
            return Err(format!("{}: top level is not an object", self.path.display()));
        }
        Ok(value)
    }

    /// Read a key synchronously, resolving defaults
    pub fn get_sync(&self, key: &str) -> Result<Value, SettingsError> {
        let root = self
            .load()
            .map_err(|reason| SettingsError::read_failure(key, reason))?;

        Ok(get_dotted(&root, key)
            .cloned()
            .or_else(|| default_value(key))
            .unwrap_or(Value::Null))
    }

    /// Write a key synchronously.
    ///
    /// An unparsable file is left untouched and the write fails rather than
    /// overwriting the user's content.
    pub fn update_sync(&self, key: &str, value: Value) -> Result<(), SettingsError> {
        let mut root = self
            .load()
            .map_err(|reason| SettingsError::write_failure(key, reason))?;

        if let Value::Object(map) = &mut root {
            map.insert(key.to_string(), value);
        }

        if let Some(parent_dir) = self.path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                std::fs::create_dir_all(parent_dir).map_err(|e| {
                    SettingsError::write_failure(key, format!("{}: {}", parent_dir.display(), e))
                })?;
            }
        }

        let json = to_pretty_json(&root).map_err(|e| SettingsError::write_failure(key, e))?;
        std::fs::write(&self.path, json).map_err(|e| {
            SettingsError::write_failure(key, format!("{}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Saved '{}' to {}", key, self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ConfigurationStore for JsonSettingsStore {
    async fn get(&self, key: &str) -> Result<Value, SettingsError> {
        self.get_sync(key)
    }

    async fn update(
        &self,
        key: &str,
        value: Value,
        target: ConfigTarget,
    ) -> Result<(), SettingsError> {
        match target {
            ConfigTarget::Global => self.update_sync(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Catalog;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonSettingsStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSettingsStore::new(temp_dir.path().join("User").join("settings.json"));
        (temp_dir, store)
    }

    #[test]
    fn every_catalog_key_has_a_default() {
        for descriptor in Catalog::builtin().descriptors() {
            assert!(
                default_value(&descriptor.key).is_some(),
                "missing default for {}",
                descriptor.key
            );
        }
    }

    #[test]
    fn missing_file_reads_defaults() {
        let (_temp, store) = create_test_store();
        assert_eq!(store.get_sync("editor.fontSize").unwrap(), json!(14));
        assert_eq!(store.get_sync("no.such.key").unwrap(), Value::Null);
    }

    #[test]
    fn flat_and_nested_keys_are_read() {
        let (_temp, store) = create_test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            r#"{"editor.fontSize": 16, "editor": {"tabSize": 2, "fontSize": 99}}"#,
        )
        .unwrap();

        assert_eq!(store.get_sync("editor.fontSize").unwrap(), json!(16));
        assert_eq!(store.get_sync("editor.tabSize").unwrap(), json!(2));
        assert_eq!(store.get_sync("editor.insertSpaces").unwrap(), json!(true));
    }

    #[test]
    fn update_creates_file_and_preserves_other_keys() {
        let (_temp, store) = create_test_store();
        store.update_sync("editor.tabSize", json!(2)).unwrap();
        store.update_sync("files.autoSave", json!("afterDelay")).unwrap();
        store.update_sync("editor.tabSize", json!(8)).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, json!({"editor.tabSize": 8, "files.autoSave": "afterDelay"}));

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["editor.tabSize", "files.autoSave"]);
        assert!(content.contains("\n    \"editor.tabSize\": 8"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn unparsable_file_is_not_overwritten() {
        let (_temp, store) = create_test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ \"editor.tabSize\": 2, // comment\n}").unwrap();

        let err = store.update_sync("editor.tabSize", json!(4)).unwrap_err();
        assert!(matches!(err, SettingsError::WriteFailure { .. }));
        let err = store.get_sync("editor.tabSize").unwrap_err();
        assert!(matches!(err, SettingsError::ReadFailure { .. }));

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("// comment"));
    }

    #[tokio::test]
    async fn store_trait_round_trip() {
        let (_temp, store) = create_test_store();
        store
            .update("editor.minimap.enabled", json!(false), ConfigTarget::Global)
            .await
            .unwrap();
        assert_eq!(store.get("editor.minimap.enabled").await.unwrap(), json!(false));
    }
}
