//! Installed extension discovery.
//!
//! `LocalExtensionRegistry` reads the `package.json` manifest of every
//! extension installed under an extensions directory (one subdirectory per
//! extension, e.g. `~/.vscode/extensions/dracula-theme.theme-dracula-2.25.1`).

use std::path::{Path, PathBuf};

use crate::settings::error::SettingsError;
use crate::settings::host::{ExtensionManifest, ExtensionRegistry};

/// Name of the manifest file inside each extension directory
const MANIFEST_FILE: &str = "package.json";

/// Extension registry backed by a local extensions directory
#[derive(Debug, Clone)]
pub struct LocalExtensionRegistry {
    extensions_dir: PathBuf,
}

impl LocalExtensionRegistry {
    pub fn new(extensions_dir: impl Into<PathBuf>) -> Self {
        Self {
            extensions_dir: extensions_dir.into(),
        }
    }

    pub fn extensions_dir(&self) -> &Path {
        &self.extensions_dir
    }

    /// Parse one manifest; unreadable or malformed manifests are skipped.
    fn load_manifest(path: &Path) -> Option<ExtensionManifest> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::debug!("Skipping malformed manifest {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl ExtensionRegistry for LocalExtensionRegistry {
    fn extensions(&self) -> Result<Vec<ExtensionManifest>, SettingsError> {
        let entries = match std::fs::read_dir(&self.extensions_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SettingsError::DiscoveryFailure(format!(
                    "{}: {}",
                    self.extensions_dir.display(),
                    e
                )))
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        Ok(dirs
            .iter()
            .filter_map(|dir| Self::load_manifest(&dir.join(MANIFEST_FILE)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(root: &Path, dir: &str, json: &str) {
        let ext_dir = root.join(dir);
        std::fs::create_dir_all(&ext_dir).unwrap();
        std::fs::write(ext_dir.join(MANIFEST_FILE), json).unwrap();
    }

    #[test]
    fn test_discovers_theme_contributions() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "dracula-theme.theme-dracula-2.25.1",
            r#"{"name":"theme-dracula","contributes":{"themes":[{"label":"Dracula","path":"./dracula.json"}]}}"#,
        );
        write_manifest(
            temp.path(),
            "eamodio.gitlens-15.0.0",
            r#"{"name":"gitlens","contributes":{"commands":[]}}"#,
        );
        write_manifest(temp.path(), "broken.ext-0.0.1", "{ not json");
        std::fs::create_dir_all(temp.path().join("empty.ext-1.0.0")).unwrap();
        std::fs::write(temp.path().join(".obsolete"), "{}").unwrap();

        let registry = LocalExtensionRegistry::new(temp.path());
        let manifests = registry.extensions().unwrap();
        assert_eq!(manifests.len(), 2);

        let themes: Vec<&str> = manifests
            .iter()
            .flat_map(|m| m.themes())
            .filter_map(|t| t.display_name())
            .collect();
        assert_eq!(themes, vec!["Dracula"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let registry = LocalExtensionRegistry::new("/nonexistent/extensions/dir");
        assert!(registry.extensions().unwrap().is_empty());
    }

    #[test]
    fn test_file_instead_of_directory_is_discovery_failure() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("extensions");
        std::fs::write(&file, "").unwrap();

        let registry = LocalExtensionRegistry::new(&file);
        assert!(matches!(
            registry.extensions(),
            Err(SettingsError::DiscoveryFailure(_))
        ));
    }
}
