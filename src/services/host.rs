//! Host actions for the terminal panel

use std::path::PathBuf;

use crate::settings::error::SettingsError;
use crate::settings::host::HostActions;

/// Opens the raw settings file with the system's default handler.
pub struct SystemOpener {
    settings_path: PathBuf,
}

impl SystemOpener {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }
}

impl HostActions for SystemOpener {
    fn open_raw_configuration(&self) -> Result<(), SettingsError> {
        if !self.settings_path.exists() {
            if let Some(parent) = self.settings_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.settings_path, "{}\n")?;
        }

        open::that_detached(&self.settings_path)?;
        tracing::debug!("Opened {}", self.settings_path.display());
        Ok(())
    }
}
