//! Sync controller
//!
//! Translates panel messages into writes against the configuration store.
//! The controller keeps no state between messages: each one is coerced,
//! written, and reported independently. Writes are best-effort and issued at
//! most once; there is no retry, batching, or rollback.

use serde_json::{Number, Value};
use std::sync::Arc;

use super::catalog::{Catalog, ControlType, COLOR_THEME_KEY};
use super::error::SettingsError;
use super::host::{ConfigTarget, ConfigurationStore, HostActions};
use super::message::{ChangeEvent, PanelMessage, RawValue};

/// What handling a message did
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// A setting was written through the generic path
    Written { key: String, value: Value },
    /// The color theme was written through the theme path
    ThemeWritten { theme: Value },
    /// The host was asked to show the raw configuration
    OpenedRawConfiguration,
    /// The message was not recognized
    Ignored,
}

/// Convert a raw UI value to the type the setting declares.
///
/// Booleans pass through. For numeric settings, a string that parses as a
/// number becomes a JSON number; anything else stays a string. A boolean
/// setting also accepts the strings `"true"` and `"false"`.
pub fn coerce(control_type: Option<ControlType>, raw: &RawValue) -> Value {
    match (control_type, raw) {
        (_, RawValue::Bool(b)) => Value::Bool(*b),
        (Some(ControlType::Number), RawValue::Text(s)) => {
            parse_number(s).unwrap_or_else(|| Value::String(s.clone()))
        }
        (Some(ControlType::Boolean), RawValue::Text(s)) => match s.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(s.clone()),
        },
        (_, RawValue::Text(s)) => Value::String(s.clone()),
    }
}

fn parse_number(text: &str) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::Number(int.into()));
    }
    let float = text.parse::<f64>().ok()?;
    // Whole values like `14.0` or `1e3` are stored as integers
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        return Some(Value::Number((float as i64).into()));
    }
    Number::from_f64(float).map(Value::Number)
}

pub struct SyncController {
    catalog: Arc<Catalog>,
    store: Arc<dyn ConfigurationStore>,
    host: Arc<dyn HostActions>,
}

impl SyncController {
    pub fn new(
        catalog: Arc<Catalog>,
        store: Arc<dyn ConfigurationStore>,
        host: Arc<dyn HostActions>,
    ) -> Self {
        Self {
            catalog,
            store,
            host,
        }
    }

    /// Handle one message from the panel.
    ///
    /// Write failures are returned to the caller, not swallowed; the panel
    /// is not reverted.
    pub async fn handle(&self, message: PanelMessage) -> Result<SyncOutcome, SettingsError> {
        match message {
            PanelMessage::UpdateSetting(event) => self.on_change(event).await,
            PanelMessage::OpenSettings => {
                tracing::info!("Opening raw configuration");
                self.host.open_raw_configuration()?;
                Ok(SyncOutcome::OpenedRawConfiguration)
            }
            PanelMessage::Unknown => {
                tracing::debug!("Ignoring unrecognized panel message");
                Ok(SyncOutcome::Ignored)
            }
        }
    }

    /// Handle a raw JSON message as posted by a markup panel
    pub async fn handle_json(&self, json: &str) -> Result<SyncOutcome, SettingsError> {
        self.handle(PanelMessage::from_json(json)?).await
    }

    async fn on_change(&self, event: ChangeEvent) -> Result<SyncOutcome, SettingsError> {
        let control_type = self
            .catalog
            .descriptor(&event.key)
            .map(|descriptor| descriptor.control_type);
        if control_type.is_none() {
            tracing::debug!("Change for '{}' which is not in the catalog", event.key);
        }
        let value = coerce(control_type, &event.raw_value);

        if event.key == COLOR_THEME_KEY {
            return self.write_theme(value).await;
        }

        self.write(&event.key, value.clone()).await?;
        Ok(SyncOutcome::Written {
            key: event.key,
            value,
        })
    }

    async fn write_theme(&self, theme: Value) -> Result<SyncOutcome, SettingsError> {
        tracing::info!("Switching color theme to {}", theme);
        self.write(COLOR_THEME_KEY, theme.clone()).await?;
        Ok(SyncOutcome::ThemeWritten { theme })
    }

    async fn write(&self, key: &str, value: Value) -> Result<(), SettingsError> {
        tracing::info!("Writing {} = {}", key, value);
        self.store
            .update(key, value, ConfigTarget::Global)
            .await
            .inspect_err(|e| tracing::error!("Write of '{}' failed: {}", key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_boolean() {
        assert_eq!(coerce(Some(ControlType::Boolean), &RawValue::Bool(true)), json!(true));
        assert_eq!(coerce(Some(ControlType::Boolean), &"false".into()), json!(false));
        assert_eq!(coerce(Some(ControlType::Boolean), &"maybe".into()), json!("maybe"));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce(Some(ControlType::Number), &"14".into()), json!(14));
        assert_eq!(coerce(Some(ControlType::Number), &" 1.5 ".into()), json!(1.5));
        assert_eq!(coerce(Some(ControlType::Number), &"-3".into()), json!(-3));
        assert_eq!(coerce(Some(ControlType::Number), &"abc".into()), json!("abc"));
        assert_eq!(coerce(Some(ControlType::Number), &"".into()), json!(""));
        assert_eq!(coerce(Some(ControlType::Number), &"NaN".into()), json!("NaN"));
    }

    #[test]
    fn test_coerce_whole_floats_to_integers() {
        assert_eq!(coerce(Some(ControlType::Number), &"14.0".into()), json!(14));
        assert_eq!(coerce(Some(ControlType::Number), &"1e3".into()), json!(1000));
        assert_eq!(coerce(Some(ControlType::Number), &"1.".into()), json!(1));
        assert_eq!(coerce(Some(ControlType::Number), &"-2.0".into()), json!(-2));
        assert!(coerce(Some(ControlType::Number), &"14.0".into()).is_i64());
        assert_eq!(coerce(Some(ControlType::Number), &"0.25".into()), json!(0.25));
        assert_eq!(coerce(Some(ControlType::Number), &"1e300".into()), json!(1e300));
    }

    #[test]
    fn test_coerce_choices_stay_strings() {
        assert_eq!(coerce(Some(ControlType::String), &"14".into()), json!("14"));
        assert_eq!(coerce(Some(ControlType::Font), &"Menlo".into()), json!("Menlo"));
        assert_eq!(coerce(Some(ControlType::Theme), &"Abyss".into()), json!("Abyss"));
    }

    #[test]
    fn test_coerce_unknown_key_by_shape() {
        assert_eq!(coerce(None, &RawValue::Bool(false)), json!(false));
        assert_eq!(coerce(None, &"12".into()), json!("12"));
    }
}
