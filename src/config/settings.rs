//! User settings for fin
//!
//! Defaults used when a command does not name a view or an output format,
//! and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::FinPaths;
use crate::display::Encoding;
use crate::error::FinError;
use crate::models::View;
use crate::storage::file_io::write_atomic;

/// User settings for fin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// View shown when none is given
    #[serde(default)]
    pub default_view: View,

    /// Output encoding used when none is given
    #[serde(default)]
    pub default_encoding: Encoding,

    /// tracing filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_filter() -> String {
    "fin=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_view: View::default(),
            default_encoding: Encoding::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &FinPaths) -> Result<Self, FinError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller asks for it
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinPaths) -> Result<(), FinError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinError::Config(format!("Failed to serialize settings: {}", e)))?;

        write_atomic(paths.settings_file(), contents.as_bytes())
    }
}
