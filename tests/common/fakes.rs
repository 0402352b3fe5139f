// In-memory stand-ins for the host collaborators

use async_trait::async_trait;
use popular_settings::settings::host::{Contributes, ExtensionManifest, ThemeContribution};
use popular_settings::settings::{
    ConfigTarget, ConfigurationStore, ExtensionRegistry, HostActions, SettingsError,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded `update` call
#[derive(Debug, Clone, PartialEq)]
pub struct WriteCall {
    pub key: String,
    pub value: Value,
    pub target: ConfigTarget,
}

/// Configuration store backed by a map that records every write
#[derive(Default)]
pub struct FakeStore {
    values: Mutex<HashMap<String, Value>>,
    writes: Mutex<Vec<WriteCall>>,
    fail_writes: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: Value) -> Self {
        self.values.lock().unwrap().insert(key.to_string(), value);
        self
    }

    /// Every write is rejected
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<WriteCall> {
        self.writes.lock().unwrap().clone()
    }

    pub fn value(&self, key: &str) -> Option<Value> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ConfigurationStore for FakeStore {
    async fn get(&self, key: &str) -> Result<Value, SettingsError> {
        Ok(self.value(key).unwrap_or(Value::Null))
    }

    async fn update(
        &self,
        key: &str,
        value: Value,
        target: ConfigTarget,
    ) -> Result<(), SettingsError> {
        self.writes.lock().unwrap().push(WriteCall {
            key: key.to_string(),
            value: value.clone(),
            target,
        });
        if self.fail_writes {
            return Err(SettingsError::write_failure(key, "store is read-only"));
        }
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

/// Extension registry returning fixed manifests, or failing
pub struct FakeExtensions {
    manifests: Option<Vec<ExtensionManifest>>,
}

impl FakeExtensions {
    pub fn none() -> Self {
        Self {
            manifests: Some(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self { manifests: None }
    }

    /// One extension contributing themes with the given labels
    pub fn with_themes(labels: &[&str]) -> Self {
        let themes = labels
            .iter()
            .map(|label| ThemeContribution {
                label: Some(label.to_string()),
                ..ThemeContribution::default()
            })
            .collect();
        Self {
            manifests: Some(vec![ExtensionManifest {
                name: Some("themes".into()),
                publisher: Some("test".into()),
                contributes: Some(Contributes {
                    themes: Some(themes),
                }),
            }]),
        }
    }
}

impl ExtensionRegistry for FakeExtensions {
    fn extensions(&self) -> Result<Vec<ExtensionManifest>, SettingsError> {
        self.manifests
            .clone()
            .ok_or_else(|| SettingsError::DiscoveryFailure("registry unavailable".into()))
    }
}

/// Host that counts raw-configuration requests
#[derive(Default)]
pub struct FakeHost {
    opened: AtomicUsize,
}

impl FakeHost {
    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl HostActions for FakeHost {
    fn open_raw_configuration(&self) -> Result<(), SettingsError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
