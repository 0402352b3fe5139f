//! Panel message contract
//!
//! The panel posts exactly two kinds of messages to the core:
//!
//! ```json
//! { "type": "updateSetting", "setting": "editor.fontSize", "value": "14" }
//! { "type": "openSettings" }
//! ```
//!
//! Any other `type` deserializes to [`PanelMessage::Unknown`] and is ignored.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::error::SettingsError;

/// Raw value of a change as the UI reports it, before coercion.
///
/// Hosts that post number inputs as JSON numbers are accepted; the number is
/// kept as its text and coerced like any typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(b) => Ok(RawValue::Bool(b)),
            Value::String(s) => Ok(RawValue::Text(s)),
            Value::Number(n) => Ok(RawValue::Text(n.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a boolean, string or number, got {other}"
            ))),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// A control reported a new value for a setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    #[serde(rename = "setting")]
    pub key: String,
    #[serde(rename = "value")]
    pub raw_value: RawValue,
}

impl ChangeEvent {
    pub fn new(key: impl Into<String>, raw_value: impl Into<RawValue>) -> Self {
        Self {
            key: key.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// Messages the panel sends to the core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelMessage {
    UpdateSetting(ChangeEvent),
    OpenSettings,
    #[serde(other)]
    Unknown,
}

impl PanelMessage {
    pub fn update(key: impl Into<String>, raw_value: impl Into<RawValue>) -> Self {
        PanelMessage::UpdateSetting(ChangeEvent::new(key, raw_value))
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}
