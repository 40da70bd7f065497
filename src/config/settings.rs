//! User settings for Outlay
//!
//! The monthly budget limit lives here, read once at startup and written
//! back on every change. An absent limit is a distinct state from a zero
//! limit, hence the Option.

use serde::{Deserialize, Serialize};

use super::paths::OutlayPaths;
use crate::error::OutlayError;
use crate::models::Money;

/// User settings for Outlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Optional monthly spending ceiling, in cents; None means no limit set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<Money>,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_limit: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if no file exists yet
    pub fn load_or_create(paths: &OutlayPaths) -> Result<Self, OutlayError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OutlayError::Io(format!("Failed to read settings file: {}", e)))?;
            serde_json::from_str(&contents)
                .map_err(|e| OutlayError::Config(format!("Failed to parse settings file: {}", e)))
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OutlayPaths) -> Result<(), OutlayError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OutlayError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| OutlayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.monthly_limit, None);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_limit = Some(Money::from_cents(50000));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_limit, Some(Money::from_cents(50000)));
    }

    #[test]
    fn test_absent_limit_stays_absent_across_save() {
        let dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(dir.path().to_path_buf());

        Settings::default().save(&paths).unwrap();

        let raw = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert!(!raw.contains("monthly_limit"));

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_limit, None);
    }

    #[test]
    fn test_zero_limit_is_distinct_from_absent() {
        let dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_limit = Some(Money::zero());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_limit, Some(Money::zero()));
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(dir.path().to_path_buf());
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }
}
