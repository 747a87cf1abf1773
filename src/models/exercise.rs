//! Exercise catalog
//!
//! The fixed list of exercises a workout can be built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body area an exercise trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Core => "core",
            Self::Cardio => "cardio",
        };
        write!(f, "{}", name)
    }
}

/// A catalog exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub muscle: &'static str,
}

const fn exercise(
    id: &'static str,
    name: &'static str,
    category: ExerciseCategory,
    muscle: &'static str,
) -> Exercise {
    Exercise {
        id,
        name,
        category,
        muscle,
    }
}

/// All exercises available to the tracker
pub const CATALOG: &[Exercise] = &[
    exercise("1", "Bench Press", ExerciseCategory::Chest, "Chest"),
    exercise("2", "Incline Dumbbell Press", ExerciseCategory::Chest, "Upper Chest"),
    exercise("3", "Push-ups", ExerciseCategory::Chest, "Chest"),
    exercise("4", "Deadlift", ExerciseCategory::Back, "Back"),
    exercise("5", "Pull-ups", ExerciseCategory::Back, "Lats"),
    exercise("6", "Barbell Rows", ExerciseCategory::Back, "Mid Back"),
    exercise("7", "Squats", ExerciseCategory::Legs, "Quadriceps"),
    exercise("8", "Leg Press", ExerciseCategory::Legs, "Legs"),
    exercise("9", "Romanian Deadlift", ExerciseCategory::Legs, "Hamstrings"),
    exercise("10", "Overhead Press", ExerciseCategory::Shoulders, "Shoulders"),
    exercise("11", "Lateral Raises", ExerciseCategory::Shoulders, "Side Delts"),
    exercise("12", "Bicep Curls", ExerciseCategory::Arms, "Biceps"),
    exercise("13", "Tricep Dips", ExerciseCategory::Arms, "Triceps"),
    exercise("14", "Plank", ExerciseCategory::Core, "Core"),
    exercise("15", "Russian Twists", ExerciseCategory::Core, "Abs"),
];

impl Exercise {
    /// Look up an exercise by catalog id
    pub fn by_id(id: &str) -> Option<&'static Exercise> {
        CATALOG.iter().find(|e| e.id == id.trim())
    }

    /// Look up an exercise by catalog id or case-insensitive name
    pub fn find(identifier: &str) -> Option<&'static Exercise> {
        let identifier = identifier.trim();
        Self::by_id(identifier).or_else(|| {
            CATALOG
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(identifier))
        })
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
