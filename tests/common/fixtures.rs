// Temporary settings and extension directories

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp directory holding a settings file and an extensions directory
pub struct SettingsFixture {
    _temp_dir: TempDir,
    pub settings_path: PathBuf,
    pub extensions_dir: PathBuf,
}

impl SettingsFixture {
    /// Settings file with the given content; `None` leaves it missing
    pub fn new(settings: Option<&str>) -> anyhow::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let settings_path = temp_dir.path().join("User").join("settings.json");
        let extensions_dir = temp_dir.path().join("extensions");
        fs::create_dir_all(&extensions_dir)?;

        if let Some(content) = settings {
            fs::create_dir_all(temp_dir.path().join("User"))?;
            fs::write(&settings_path, content)?;
        }

        Ok(Self {
            _temp_dir: temp_dir,
            settings_path,
            extensions_dir,
        })
    }

    /// Install an extension with the given `package.json`
    pub fn install_extension(&self, dir_name: &str, manifest: &str) -> anyhow::Result<PathBuf> {
        let dir = self.extensions_dir.join(dir_name);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("package.json"), manifest)?;
        Ok(dir)
    }

    pub fn read_settings(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::from_str(&fs::read_to_string(&self.settings_path)?)?)
    }

    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }
}
