//! User repository for JSON storage
//!
//! Manages loading and saving registered users to users.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use crate::error::{BodaiError, BodaiResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
    /// Index: normalized email -> user_id
    by_email: RwLock<HashMap<String, UserId>>,
    /// Held across snapshot, write and rename
    save_lock: Mutex<()>,
}

fn lock_error(e: impl std::fmt::Display) -> BodaiError {
    BodaiError::Storage(format!("Failed to acquire lock: {}", e))
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_email: RwLock::new(HashMap::new()),
            save_lock: Mutex::new(()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> BodaiResult<()> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_email = self.by_email.write().map_err(lock_error)?;

        data.clear();
        by_email.clear();

        for user in file_data.users {
            by_email.insert(User::normalize_email(&user.email), user.id);
            data.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk, oldest registration first
    ///
    /// Saves take turns, and each one snapshots the map after the previous
    /// save finished, so a stale snapshot never replaces a newer file.
    pub fn save(&self) -> BodaiResult<()> {
        let _guard = self.save_lock.lock().map_err(lock_error)?;
        let users = self.get_all()?;
        write_json_atomic(&self.path, &UserData { users })
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> BodaiResult<Option<User>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Get all users in registration order
    pub fn get_all(&self) -> BodaiResult<Vec<User>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    /// Get a user by email (case-insensitive, surrounding whitespace ignored)
    pub fn get_by_email(&self, email: &str) -> BodaiResult<Option<User>> {
        let data = self.data.read().map_err(lock_error)?;
        let by_email = self.by_email.read().map_err(lock_error)?;

        Ok(by_email
            .get(&User::normalize_email(email))
            .and_then(|id| data.get(id))
            .cloned())
    }

    /// Insert a new user
    ///
    /// Fails with a duplicate error when the email is already registered.
    /// The check and the insert happen under one write lock, so two
    /// concurrent registrations for the same email cannot both succeed.
    pub fn insert(&self, user: User) -> BodaiResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_email = self.by_email.write().map_err(lock_error)?;

        let normalized = User::normalize_email(&user.email);
        if by_email.contains_key(&normalized) {
            return Err(BodaiError::Duplicate {
                entity_type: "User",
                identifier: normalized,
            });
        }

        by_email.insert(normalized, user.id);
        data.insert(user.id, user);
        Ok(())
    }

    /// Remove a user, e.g. to undo an insert that could not be saved
    pub fn remove(&self, id: UserId) -> BodaiResult<bool> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_email = self.by_email.write().map_err(lock_error)?;

        match data.remove(&id) {
            Some(user) => {
                by_email.remove(&User::normalize_email(&user.email));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Count users
    pub fn count(&self) -> BodaiResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
