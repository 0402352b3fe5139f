//! Value snapshot
//!
//! Joins every catalog descriptor with its current value from the store and,
//! for choice controls, its resolved options. A snapshot is rebuilt from
//! scratch on every render pass and never cached.

use serde_json::Value;

use super::catalog::{Catalog, SettingDescriptor};
use super::host::{ConfigurationStore, ExtensionRegistry};
use super::options::{OptionResolver, ResolvedOptions};

/// Current value of a setting as read from the store.
///
/// Values are passed through as-is; a value whose shape doesn't match the
/// descriptor's control type is kept rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    /// The store has no value and no default
    Unset,
    /// Arrays and objects
    Other(Value),
}

impl SettingValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Unset,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Other(other.clone()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
            Self::Unset => Value::Null,
            Self::Other(v) => v.clone(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness used for toggle state: non-empty strings and non-zero
    /// numbers count as checked
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Self::Text(s) => !s.is_empty(),
            Self::Unset => false,
            Self::Other(_) => true,
        }
    }

    /// Text pre-filled into a numeric input
    pub fn input_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Unset => String::new(),
            Self::Other(v) => v.to_string(),
        }
    }
}

/// A descriptor joined with its value at render time
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSetting {
    pub descriptor: SettingDescriptor,
    pub value: SettingValue,
    /// Present for choice controls only
    pub options: Option<ResolvedOptions>,
}

impl RenderedSetting {
    pub fn key(&self) -> &str {
        &self.descriptor.key
    }
}

/// One catalog group with the values of its settings
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSnapshot {
    pub title: String,
    pub settings: Vec<RenderedSetting>,
}

/// Read every catalog setting from the store.
///
/// A failed read is logged and shown as unset; it never aborts the snapshot.
pub async fn build_snapshot(
    catalog: &Catalog,
    store: &dyn ConfigurationStore,
    extensions: &dyn ExtensionRegistry,
) -> Vec<GroupSnapshot> {
    let resolver = OptionResolver::new(extensions);
    let mut groups = Vec::with_capacity(catalog.groups().len());

    for group in catalog.groups() {
        let mut settings = Vec::with_capacity(group.settings.len());
        for descriptor in &group.settings {
            let value = match store.get(&descriptor.key).await {
                Ok(value) => SettingValue::from_json(&value),
                Err(e) => {
                    tracing::warn!("Failed to read '{}': {}", descriptor.key, e);
                    SettingValue::Unset
                }
            };
            let options = resolver.resolve(descriptor, &value);
            settings.push(RenderedSetting {
                descriptor: descriptor.clone(),
                value,
                options,
            });
        }
        groups.push(GroupSnapshot {
            title: group.title.clone(),
            settings,
        });
    }

    tracing::debug!("Built snapshot of {} settings", catalog.len());
    groups
}
