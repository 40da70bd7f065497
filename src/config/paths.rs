//! Path management for Outlay
//!
//! XDG-style path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `OUTLAY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/outlay` or `~/.config/outlay`
//! 3. Windows: `%APPDATA%\outlay`

use std::path::PathBuf;

use crate::error::OutlayError;

/// Manages all paths used by Outlay
#[derive(Debug, Clone)]
pub struct OutlayPaths {
    base_dir: PathBuf,
}

impl OutlayPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, OutlayError> {
        let base_dir = if let Ok(custom) = std::env::var("OUTLAY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Base directory for all Outlay data
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Data directory holding the expense file
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Path to the diagnostic log
    pub fn diag_log(&self) -> PathBuf {
        self.base_dir.join("diag.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), OutlayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OutlayError::Io(format!("Failed to create base directory: {}", e)))?;
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OutlayError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, OutlayError> {
    // Unix (Linux/macOS): XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| OutlayError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("outlay"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, OutlayError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| OutlayError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("outlay"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), dir.path());
        assert_eq!(paths.data_dir(), dir.path().join("data"));
        assert_eq!(paths.settings_file(), dir.path().join("config.json"));
        assert_eq!(
            paths.expenses_file(),
            dir.path().join("data").join("expenses.json")
        );
        assert_eq!(paths.diag_log(), dir.path().join("diag.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }
}
