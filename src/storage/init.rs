//! Storage initialization
//!
//! First-run setup: directories, default settings and empty data files.

use crate::config::paths::BodaiPaths;
use crate::config::settings::Settings;
use crate::error::BodaiResult;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing files are left alone, so running it twice is harmless.
pub fn initialize_storage(paths: &BodaiPaths) -> BodaiResult<()> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    for (file, key) in [(paths.users_file(), "users"), (paths.profiles_file(), "profiles")] {
        if !file.exists() {
            let mut empty = serde_json::Map::new();
            empty.insert(key.to_string(), serde_json::Value::Array(Vec::new()));
            write_json_atomic(&file, &empty)?;
        }
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BodaiPaths) -> bool {
    !paths.is_initialized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BodaiPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.users_file().exists());
        assert!(paths.profiles_file().exists());

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.users.count().unwrap(), 0);
    }

    #[test]
    fn test_doesnt_overwrite_existing_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BodaiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.server.bind = "0.0.0.0:8080".into();
        paths.ensure_directories().unwrap();
        settings.save(&paths).unwrap();

        initialize_storage(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.server.bind, "0.0.0.0:8080");
    }
}
