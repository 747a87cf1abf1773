//! Profile repository for JSON storage
//!
//! Submitted onboarding profiles live in profiles.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use crate::error::{BodaiError, BodaiResult};
use crate::models::{ProfileId, SubmittedProfile, User};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProfileData {
    profiles: Vec<SubmittedProfile>,
}

/// Repository for submitted profiles
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<HashMap<ProfileId, SubmittedProfile>>,
    /// Held across snapshot, write and rename
    save_lock: Mutex<()>,
}

fn lock_error(e: impl std::fmt::Display) -> BodaiError {
    BodaiError::Storage(format!("Failed to acquire lock: {}", e))
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            save_lock: Mutex::new(()),
        }
    }

    /// Load profiles from disk
    pub fn load(&self) -> BodaiResult<()> {
        let file_data: ProfileData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for submitted in file_data.profiles {
            data.insert(submitted.id, submitted);
        }
        Ok(())
    }

    /// Save profiles to disk; concurrent saves take turns
    pub fn save(&self) -> BodaiResult<()> {
        let _guard = self.save_lock.lock().map_err(lock_error)?;
        let profiles = self.get_all()?;
        write_json_atomic(&self.path, &ProfileData { profiles })
    }

    /// Get a profile by ID
    pub fn get(&self, id: ProfileId) -> BodaiResult<Option<SubmittedProfile>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All profiles, oldest submission first
    pub fn get_all(&self) -> BodaiResult<Vec<SubmittedProfile>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut profiles: Vec<_> = data.values().cloned().collect();
        profiles.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(profiles)
    }

    /// The most recent profile submitted for an email
    pub fn latest_for_email(&self, email: &str) -> BodaiResult<Option<SubmittedProfile>> {
        let wanted = User::normalize_email(email);
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|p| p.email.as_deref() == Some(wanted.as_str()))
            .last())
    }

    /// Insert or replace a profile
    pub fn upsert(&self, submitted: SubmittedProfile) -> BodaiResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(submitted.id, submitted);
        Ok(())
    }

    /// Remove a profile, e.g. to undo an upsert that could not be saved
    pub fn remove(&self, id: ProfileId) -> BodaiResult<bool> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id).is_some())
    }

    /// Count profiles
    pub fn count(&self) -> BodaiResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
