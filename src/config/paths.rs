//! Path management for BodAI
//!
//! Provides path resolution for configuration, the local backing store,
//! the audit log and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `BODAI_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/bodai` on Linux, `~/Library/Application Support/bodai`
//!    on macOS, `%APPDATA%\bodai\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BodaiError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BODAI_DATA_DIR";

/// Manages all paths used by BodAI
#[derive(Debug, Clone)]
pub struct BodaiPaths {
    /// Base directory for all BodAI data
    base_dir: PathBuf,
}

impl BodaiPaths {
    /// Create a new BodaiPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BodaiError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BodaiPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the JSON repositories
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default directory for CSV/JSON/YAML exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to profiles.json (submitted onboarding profiles)
    pub fn profiles_file(&self) -> PathBuf {
        self.data_dir().join("profiles.json")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), BodaiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BodaiError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BodaiError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| BodaiError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if BodAI has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BodaiError> {
    ProjectDirs::from("", "", "bodai")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BodaiError::Config("Could not determine a home directory".into()))
}
