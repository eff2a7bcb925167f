//! Path management for fin
//!
//! ## Path Resolution Order
//!
//! 1. `FIN_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `fin`
//!    (`~/.config/fin` on Linux, `%APPDATA%\fin` on Windows)

use std::ffi::OsString;
use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::FinError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FIN_DATA_DIR";

/// Manages all paths used by fin
#[derive(Debug, Clone)]
pub struct FinPaths {
    base_dir: PathBuf,
}

impl FinPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinError> {
        Self::from_override(std::env::var_os(DATA_DIR_ENV))
    }

    /// Resolve paths from an optional `FIN_DATA_DIR` value
    pub fn from_override(custom: Option<OsString>) -> Result<Self, FinError> {
        let base_dir = match custom {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one ledger document per currency
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if fin has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| FinError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("fin"))
}
