//! Onboarding wizard state machine
//!
//! Holds the step index, the profile in progress and the errors recorded by
//! the last validation. Forward moves are gated on the current step's
//! validation; backward moves never validate.

use crate::error::{BodaiError, BodaiResult};
use crate::models::{Equipment, Goal, Lifestyle, Profile, ProfileField, WorkoutLocation};

use super::validation::{describe_errors, validate_step, FieldErrors, WizardStep};

/// The onboarding wizard
#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    step: WizardStep,
    profile: Profile,
    errors: FieldErrors,
}

impl OnboardingWizard {
    /// Start a wizard at the first step with an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The profile in progress
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Errors recorded by the last validation
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error recorded for one field, if any
    pub fn error_for(&self, field: ProfileField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Whether the wizard is on its final step
    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::LAST
    }

    fn edit(&mut self, field: ProfileField, apply: impl FnOnce(&mut Profile)) {
        apply(&mut self.profile);
        self.errors.remove(&field);
    }

    /// Set the height answer (free text)
    pub fn set_height(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(ProfileField::Height, |p| p.height = value);
    }

    /// Set the weight answer (free text)
    pub fn set_weight(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(ProfileField::Weight, |p| p.weight = value);
    }

    /// Set the age answer
    pub fn set_age(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(ProfileField::Age, |p| p.age = value);
    }

    /// Set the training background
    pub fn set_workout_history(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(ProfileField::WorkoutHistory, |p| p.workout_history = value);
    }

    /// Set the optional medical conditions
    pub fn set_medical_conditions(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(ProfileField::MedicalConditions, |p| {
            p.medical_conditions = value
        });
    }

    /// Set or clear the lifestyle category
    pub fn set_lifestyle(&mut self, value: Option<Lifestyle>) {
        self.edit(ProfileField::Lifestyle, |p| p.lifestyle = value);
    }

    /// Set the daily routine description
    pub fn set_daily_routines(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(ProfileField::DailyRoutines, |p| p.daily_routines = value);
    }

    /// Set the primary goal; it is dropped from the secondary goals
    pub fn set_primary_goal(&mut self, goal: Option<Goal>) {
        self.edit(ProfileField::PrimaryGoal, |p| p.set_primary_goal(goal));
    }

    /// Toggle a secondary goal; refused (returns `false`) for the primary goal
    pub fn toggle_secondary_goal(&mut self, goal: Goal) -> bool {
        let mut accepted = false;
        self.edit(ProfileField::SecondaryGoals, |p| {
            accepted = p.toggle_secondary_goal(goal)
        });
        accepted
    }

    /// Toggle an equipment option on or off
    pub fn toggle_equipment(&mut self, equipment: Equipment) {
        self.edit(ProfileField::EquipmentAvailability, |p| {
            p.toggle_equipment(equipment)
        });
    }

    /// Set or clear the workout location
    pub fn set_workout_location(&mut self, value: Option<WorkoutLocation>) {
        self.edit(ProfileField::WorkoutLocation, |p| p.workout_location = value);
    }

    /// Validate the current step, replacing the recorded errors
    ///
    /// Returns `true` when the step has no errors.
    pub fn validate_current(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.profile);
        self.errors.is_empty()
    }

    /// Advance to the next step if the current one validates
    ///
    /// Returns `false` when validation fails or the wizard is already on the
    /// last step.
    pub fn next(&mut self) -> bool {
        if !self.validate_current() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Go back one step without validating
    ///
    /// Returns `false` when already on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Submit the finished profile
    ///
    /// Only accepted on the last step once it validates. On success the
    /// profile moves out and the wizard starts over.
    pub fn submit(&mut self) -> BodaiResult<Profile> {
        if !self.is_last_step() {
            return Err(BodaiError::Validation(format!(
                "Profile can only be submitted from the {} step",
                WizardStep::LAST
            )));
        }
        if !self.validate_current() {
            return Err(BodaiError::Validation(describe_errors(&self.errors)));
        }

        let profile = std::mem::take(&mut self.profile);
        *self = Self::new();
        Ok(profile)
    }
}
