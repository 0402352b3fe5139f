//! Error types for the settings core

use thiserror::Error;

/// Errors surfaced by the settings core.
///
/// Only [`SettingsError::WriteFailure`] is expected to reach the user; the
/// other conditions are recovered where they occur and only logged.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configuration store rejected or failed a write
    #[error("failed to write '{key}': {reason}")]
    WriteFailure { key: String, reason: String },

    /// The configuration store failed a read
    #[error("failed to read '{key}': {reason}")]
    ReadFailure { key: String, reason: String },

    /// Enumerating installed extensions failed
    #[error("extension discovery failed: {0}")]
    DiscoveryFailure(String),

    /// A catalog file could not be loaded
    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SettingsError {
    pub fn write_failure(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::WriteFailure {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn read_failure(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::ReadFailure {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}
