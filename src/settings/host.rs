//! Interfaces to the host environment
//!
//! The settings core never touches the configuration file, the extension
//! directory, or the user's editor directly. The host supplies these traits;
//! tests substitute in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SettingsError;

/// Where a configuration write lands.
///
/// The panel only ever writes user-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ConfigTarget {
    #[default]
    Global,
}

/// Authoritative configuration store
///
/// Reads are default-resolved by the store itself: a key the user never set
/// reads as its default, and `Value::Null` only when no default exists.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Read the current value of a dotted key
    async fn get(&self, key: &str) -> Result<Value, SettingsError>;

    /// Write a value for a dotted key
    async fn update(&self, key: &str, value: Value, target: ConfigTarget)
        -> Result<(), SettingsError>;
}

/// One theme contributed by an extension
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeContribution {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub ui_theme: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ThemeContribution {
    /// Name shown in the theme list: the label, else the id
    pub fn display_name(&self) -> Option<&str> {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .or_else(|| self.id.as_deref().filter(|id| !id.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contributes {
    #[serde(default)]
    pub themes: Option<Vec<ThemeContribution>>,
}

/// The part of an installed extension's manifest the panel cares about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub contributes: Option<Contributes>,
}

impl ExtensionManifest {
    /// Themes this extension contributes, if any
    pub fn themes(&self) -> &[ThemeContribution] {
        self.contributes
            .as_ref()
            .and_then(|contributes| contributes.themes.as_deref())
            .unwrap_or(&[])
    }
}

/// Read-only view of the installed extensions
pub trait ExtensionRegistry: Send + Sync {
    fn extensions(&self) -> Result<Vec<ExtensionManifest>, SettingsError>;
}

/// Registry with nothing installed
pub struct NoExtensions;

impl ExtensionRegistry for NoExtensions {
    fn extensions(&self) -> Result<Vec<ExtensionManifest>, SettingsError> {
        Ok(Vec::new())
    }
}

/// Actions the host performs on the panel's behalf
pub trait HostActions: Send + Sync {
    /// Present the raw configuration file to the user
    fn open_raw_configuration(&self) -> Result<(), SettingsError>;
}
