//! Path management for Calculatron
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `CALCULATRON_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/calculatron` or `~/.config/calculatron`
//! 3. Windows: `%APPDATA%\calculatron`

use std::path::PathBuf;

use crate::error::CalcError;

/// Manages all paths used by Calculatron
#[derive(Debug, Clone)]
pub struct CalcPaths {
    /// Base directory for all Calculatron data
    base_dir: PathBuf,
}

impl CalcPaths {
    /// Create a new CalcPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CalcError> {
        let base_dir = if let Ok(custom) = std::env::var("CALCULATRON_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CalcPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/calculatron/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), CalcError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CalcError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CalcError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| CalcError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("calculatron"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CalcError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CalcError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("calculatron"))
}
