//! Onboarding profile model
//!
//! The profile is what the onboarding wizard collects: body measurements,
//! training background, lifestyle, goals and available equipment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ids::ProfileId;

/// Macro to generate closed choice enums with stable keys and display labels
macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in menu order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable key used in JSON and on the command line
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            /// Accepts the key or the label, case-insensitively
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.key() == wanted || c.label().to_lowercase() == wanted)
                    .ok_or_else(|| format!("Unknown {}: {}", $what, s.trim()))
            }
        }
    };
}

define_choice! {
    /// Daily activity level
    Lifestyle, "lifestyle" {
        VeryActive => ("very-active", "Very Active (Physical job + regular exercise)"),
        Active => ("active", "Active (Regular exercise, desk job)"),
        ModeratelyActive => ("moderately-active", "Moderately Active (Light exercise 1-3 times/week)"),
        Sedentary => ("sedentary", "Sedentary (Minimal physical activity)"),
        HighlyVariable => ("highly-variable", "Highly Variable (Schedule changes frequently)"),
    }
}

define_choice! {
    /// Fitness goal, used for both the primary and the secondary goals
    Goal, "goal" {
        FatLoss => ("fat-loss", "Fat Loss"),
        MuscleBuilding => ("muscle-building", "Muscle Building (Bulking)"),
        Maintenance => ("maintenance", "Maintenance"),
        StrengthBuilding => ("strength-building", "Strength Building"),
        EnduranceImprovement => ("endurance-improvement", "Endurance Improvement"),
        AthleticPerformance => ("athletic-performance", "Athletic Performance"),
        GeneralFitness => ("general-fitness", "General Fitness"),
    }
}

define_choice! {
    /// Equipment the user has access to
    Equipment, "equipment option" {
        HomeGym => ("home-gym", "Home Gym (Full Equipment)"),
        CommercialGym => ("commercial-gym", "Commercial Gym Access"),
        BasicEquipment => ("basic-equipment", "Basic Equipment (Dumbbells, Resistance Bands)"),
        BodyweightOnly => ("bodyweight-only", "Bodyweight Only"),
        CardioEquipment => ("cardio-equipment", "Cardio Equipment (Treadmill, Bike)"),
        OlympicBarbell => ("olympic-barbell", "Olympic Barbell & Plates"),
        Kettlebells => ("kettlebells", "Kettlebells"),
        NoEquipment => ("no-equipment", "No Equipment Available"),
    }
}

define_choice! {
    /// Where the user usually trains
    WorkoutLocation, "workout location" {
        Home => ("home", "Home"),
        CommercialGym => ("commercial-gym", "Commercial Gym"),
        Outdoor => ("outdoor", "Outdoor"),
        Office => ("office", "Office/Work"),
        Mixed => ("mixed", "Mixed Locations"),
    }
}

/// Names of the profile fields, used to key validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Height,
    Weight,
    Age,
    WorkoutHistory,
    MedicalConditions,
    Lifestyle,
    DailyRoutines,
    PrimaryGoal,
    SecondaryGoals,
    EquipmentAvailability,
    WorkoutLocation,
}

impl ProfileField {
    /// The field's JSON name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Age => "age",
            Self::WorkoutHistory => "workoutHistory",
            Self::MedicalConditions => "medicalConditions",
            Self::Lifestyle => "lifestyle",
            Self::DailyRoutines => "dailyRoutines",
            Self::PrimaryGoal => "primaryGoal",
            Self::SecondaryGoals => "secondaryGoals",
            Self::EquipmentAvailability => "equipmentAvailability",
            Self::WorkoutLocation => "workoutLocation",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's onboarding profile
///
/// Height, weight and age are free text ("175 cm", "5'9", ...). Everything
/// is required except `medical_conditions` and `secondary_goals`; the
/// onboarding validator enforces that per step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub height: String,
    pub weight: String,
    pub age: String,
    pub workout_history: String,
    pub medical_conditions: String,
    pub lifestyle: Option<Lifestyle>,
    pub daily_routines: String,
    pub primary_goal: Option<Goal>,
    pub secondary_goals: BTreeSet<Goal>,
    pub equipment_availability: BTreeSet<Equipment>,
    pub workout_location: Option<WorkoutLocation>,
}

impl Profile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary goal, dropping it from the secondary goals
    pub fn set_primary_goal(&mut self, goal: Option<Goal>) {
        self.primary_goal = goal;
        if let Some(goal) = goal {
            self.secondary_goals.remove(&goal);
        }
    }

    /// Toggle a secondary goal
    ///
    /// Returns `false` (and changes nothing) when `goal` is the primary goal.
    pub fn toggle_secondary_goal(&mut self, goal: Goal) -> bool {
        if self.primary_goal == Some(goal) {
            return false;
        }
        if !self.secondary_goals.remove(&goal) {
            self.secondary_goals.insert(goal);
        }
        true
    }

    /// Goals that may still be picked as secondary goals
    pub fn secondary_goal_candidates(&self) -> Vec<Goal> {
        Goal::ALL
            .iter()
            .copied()
            .filter(|g| Some(*g) != self.primary_goal)
            .collect()
    }

    /// Toggle an equipment option on or off
    pub fn toggle_equipment(&mut self, equipment: Equipment) {
        if !self.equipment_availability.remove(&equipment) {
            self.equipment_availability.insert(equipment);
        }
    }

    /// Restore the secondary-goal invariant on a profile built elsewhere
    /// (e.g. deserialized from an API request)
    pub fn normalize(&mut self) {
        if let Some(primary) = self.primary_goal {
            self.secondary_goals.remove(&primary);
        }
    }
}

/// A profile that has been handed over by the wizard or the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedProfile {
    /// Unique identifier
    pub id: ProfileId,

    /// Email of the owning user, when the submitter gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the profile was submitted
    pub submitted_at: DateTime<Utc>,

    /// The submitted answers
    pub profile: Profile,
}

impl SubmittedProfile {
    /// Wrap a profile for storage
    pub fn new(profile: Profile, email: Option<String>) -> Self {
        Self {
            id: ProfileId::new(),
            email,
            submitted_at: Utc::now(),
            profile,
        }
    }
}
