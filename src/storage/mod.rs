//! Storage layer for BodAI
//!
//! JSON file storage with atomic writes and an audit trail. Repositories
//! keep their data in memory behind `RwLock`s and are flushed with `save`.

pub mod file_io;
pub mod init;
pub mod profiles;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use profiles::ProfileRepository;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BodaiPaths;
use crate::error::BodaiResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BodaiPaths,
    audit: AuditLogger,
    pub users: UserRepository,
    pub profiles: ProfileRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BodaiPaths) -> BodaiResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            users: UserRepository::new(paths.users_file()),
            profiles: ProfileRepository::new(paths.profiles_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BodaiPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> BodaiResult<()> {
        self.users.load()?;
        self.profiles.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> BodaiResult<()> {
        self.users.save()?;
        self.profiles.save()?;
        Ok(())
    }

    /// Record the creation of an entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> BodaiResult<()> {
        self.audit.log(&AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
