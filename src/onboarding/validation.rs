//! Per-step profile validation
//!
//! Each wizard step checks only its own fields. Nothing here looks across
//! steps; [`validate_profile`] simply runs every step for callers that
//! receive a finished profile at once.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Profile, ProfileField};

/// Missing or invalid fields, with the message to show next to each
pub type FieldErrors = BTreeMap<ProfileField, &'static str>;

/// The five onboarding steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    BasicInfo,
    HealthHistory,
    Lifestyle,
    Goals,
    Equipment,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [WizardStep; 5] = [
        WizardStep::BasicInfo,
        WizardStep::HealthHistory,
        WizardStep::Lifestyle,
        WizardStep::Goals,
        WizardStep::Equipment,
    ];

    /// The first step
    pub const FIRST: WizardStep = WizardStep::BasicInfo;

    /// The last step
    pub const LAST: WizardStep = WizardStep::Equipment;

    /// Zero-based position of the step
    pub fn index(&self) -> usize {
        match self {
            Self::BasicInfo => 0,
            Self::HealthHistory => 1,
            Self::Lifestyle => 2,
            Self::Goals => 3,
            Self::Equipment => 4,
        }
    }

    /// Step at a zero-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, if any
    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Title shown in the step header
    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::HealthHistory => "Health & History",
            Self::Lifestyle => "Lifestyle",
            Self::Goals => "Goals",
            Self::Equipment => "Equipment",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::FIRST
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the fields that belong to one step
pub fn validate_step(step: WizardStep, profile: &Profile) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        WizardStep::BasicInfo => {
            if blank(&profile.height) {
                errors.insert(ProfileField::Height, "Height is required");
            }
            if blank(&profile.weight) {
                errors.insert(ProfileField::Weight, "Weight is required");
            }
            if blank(&profile.age) {
                errors.insert(ProfileField::Age, "Age is required");
            }
        }
        WizardStep::HealthHistory => {
            if blank(&profile.workout_history) {
                errors.insert(ProfileField::WorkoutHistory, "Workout history is required");
            }
        }
        WizardStep::Lifestyle => {
            if profile.lifestyle.is_none() {
                errors.insert(ProfileField::Lifestyle, "Lifestyle information is required");
            }
            if blank(&profile.daily_routines) {
                errors.insert(
                    ProfileField::DailyRoutines,
                    "Daily routines information is required",
                );
            }
        }
        WizardStep::Goals => {
            if profile.primary_goal.is_none() {
                errors.insert(ProfileField::PrimaryGoal, "Primary goal is required");
            }
        }
        WizardStep::Equipment => {
            if profile.equipment_availability.is_empty() {
                errors.insert(
                    ProfileField::EquipmentAvailability,
                    "Please select at least one equipment option",
                );
            }
            if profile.workout_location.is_none() {
                errors.insert(ProfileField::WorkoutLocation, "Workout location is required");
            }
        }
    }

    errors
}

/// Validate every step of a finished profile
pub fn validate_profile(profile: &Profile) -> FieldErrors {
    WizardStep::ALL
        .iter()
        .flat_map(|step| validate_step(*step, profile))
        .collect()
}

/// Render field errors as a single line ("height: Height is required; ...")
pub fn describe_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}
