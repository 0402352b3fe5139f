//! Default locations of the files the panel works with

use std::path::{Path, PathBuf};

/// System directories the default paths are derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryContext {
    /// Platform config directory, e.g. `~/.config` on Linux and
    /// `~/Library/Application Support` on macOS
    pub config_dir: PathBuf,

    /// User's home directory
    pub home_dir: Option<PathBuf>,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories.
    /// This should ONLY be called from main()
    pub fn from_system() -> std::io::Result<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        Ok(Self {
            config_dir,
            home_dir: dirs::home_dir(),
        })
    }

    /// Create a DirectoryContext for testing with a temp directory
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            config_dir: temp_dir.join("config"),
            home_dir: Some(temp_dir.join("home")),
        }
    }

    /// User-level settings file: `<config_dir>/Code/User/settings.json`
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("Code").join("User").join("settings.json")
    }

    /// Installed extensions: `~/.vscode/extensions`
    pub fn extensions_dir(&self) -> PathBuf {
        self.home_dir
            .clone()
            .unwrap_or_else(|| self.config_dir.clone())
            .join(".vscode")
            .join("extensions")
    }
}

/// Paths resolved from command-line overrides and the directory defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelPaths {
    pub settings: PathBuf,
    pub extensions_dir: PathBuf,
    pub catalog: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl PanelPaths {
    pub fn resolve(
        dirs: &DirectoryContext,
        settings: Option<PathBuf>,
        extensions_dir: Option<PathBuf>,
        catalog: Option<PathBuf>,
        log_file: PathBuf,
    ) -> Self {
        Self {
            settings: settings.unwrap_or_else(|| dirs.settings_path()),
            extensions_dir: extensions_dir.unwrap_or_else(|| dirs.extensions_dir()),
            catalog,
            log_file,
        }
    }

    /// Print every path, for `--show-paths`
    pub fn print(&self) {
        println!("Settings file:   {}", self.settings.display());
        println!("Extensions dir:  {}", self.extensions_dir.display());
        match &self.catalog {
            Some(catalog) => println!("Catalog file:    {}", catalog.display()),
            None => println!("Catalog file:    (built-in only)"),
        }
        println!("Log file:        {}", self.log_file.display());
    }
}
