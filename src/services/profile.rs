//! Profile submission service

use crate::audit::EntityType;
use crate::error::{BodaiError, BodaiResult};
use crate::models::{Profile, ProfileId, SubmittedProfile, User};
use crate::onboarding::validation::{describe_errors, validate_profile};
use crate::storage::Storage;

/// Service for submitted onboarding profiles
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a finished profile
    ///
    /// Every step's rules are checked again, since API submissions never went
    /// through the wizard.
    pub fn submit(
        &self,
        mut profile: Profile,
        email: Option<String>,
    ) -> BodaiResult<SubmittedProfile> {
        profile.normalize();

        let errors = validate_profile(&profile);
        if !errors.is_empty() {
            return Err(BodaiError::Validation(describe_errors(&errors)));
        }

        let email = email
            .map(|e| User::normalize_email(&e))
            .filter(|e| !e.is_empty());
        let submitted = SubmittedProfile::new(profile, email);

        self.storage.profiles.upsert(submitted.clone())?;
        if let Err(e) = self.storage.profiles.save() {
            self.storage.profiles.remove(submitted.id)?;
            return Err(e);
        }

        self.storage.log_create(
            EntityType::Profile,
            submitted.id.to_string(),
            submitted.email.clone(),
            &submitted,
        )?;

        tracing::info!(profile_id = %submitted.id, "stored onboarding profile");
        Ok(submitted)
    }

    /// All submitted profiles, oldest first
    pub fn list(&self) -> BodaiResult<Vec<SubmittedProfile>> {
        self.storage.profiles.get_all()
    }

    /// Get a profile by ID
    pub fn get(&self, id: ProfileId) -> BodaiResult<Option<SubmittedProfile>> {
        self.storage.profiles.get(id)
    }

    /// Find a profile by ID, or the latest one submitted for an email
    pub fn find(&self, identifier: &str) -> BodaiResult<SubmittedProfile> {
        let found = match identifier.parse::<ProfileId>() {
            Ok(id) => self.get(id)?,
            Err(_) => self.storage.profiles.latest_for_email(identifier)?,
        };
        found.ok_or_else(|| BodaiError::profile_not_found(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BodaiPaths;
    use crate::models::{Equipment, Goal, Lifestyle, WorkoutLocation};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BodaiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn complete_profile() -> Profile {
        let mut profile = Profile::new();
        profile.height = "175 cm".into();
        profile.weight = "70 kg".into();
        profile.age = "25".into();
        profile.workout_history = "Beginner".into();
        profile.lifestyle = Some(Lifestyle::ModeratelyActive);
        profile.daily_routines = "Office 9-5".into();
        profile.primary_goal = Some(Goal::FatLoss);
        profile.equipment_availability.insert(Equipment::BodyweightOnly);
        profile.workout_location = Some(WorkoutLocation::Home);
        profile
    }

    #[test]
    fn test_submit_and_find() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let submitted = service
            .submit(complete_profile(), Some(" Ada@Example.com".into()))
            .unwrap();

        assert_eq!(submitted.email.as_deref(), Some("ada@example.com"));
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(service.find("ada@example.com").unwrap().id, submitted.id);
        assert_eq!(
            service.find(&submitted.id.as_uuid().to_string()).unwrap().profile.age,
            "25"
        );
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_incomplete_profile_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let mut profile = complete_profile();
        profile.age = "  ".into();
        let err = service.submit(profile, None).unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("Age is required"));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_primary_goal_dropped_from_secondary() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let mut profile = complete_profile();
        profile.secondary_goals.insert(Goal::FatLoss);
        profile.secondary_goals.insert(Goal::Maintenance);

        let submitted = service.submit(profile, None).unwrap();
        assert!(!submitted.profile.secondary_goals.contains(&Goal::FatLoss));
        assert!(submitted.profile.secondary_goals.contains(&Goal::Maintenance));
    }

    #[test]
    fn test_find_unknown() {
        let (_temp_dir, storage) = create_test_storage();
        let err = ProfileService::new(&storage).find("nobody@example.com").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let (temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let profiles_file =
            BodaiPaths::with_base_dir(temp_dir.path().to_path_buf()).profiles_file();
        let _ = std::fs::remove_file(&profiles_file);
        std::fs::create_dir_all(&profiles_file).unwrap();

        let err = service.submit(complete_profile(), None).unwrap_err();
        assert!(matches!(err, BodaiError::Storage(_)));
        assert!(service.list().unwrap().is_empty());
        assert!(storage.audit().read_all().unwrap().is_empty());
    }
}
