//! Workout model
//!
//! A workout is one day's training: an ordered list of exercises, each with
//! an ordered list of sets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use super::ids::{SetId, WorkoutId};

/// A single set of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: SetId,
    pub reps: u32,
    pub weight: f64,
    pub completed: bool,
}

impl WorkoutSet {
    /// A fresh zero-valued, incomplete set
    pub fn new() -> Self {
        Self {
            id: SetId::new(),
            reps: 0,
            weight: 0.0,
            completed: false,
        }
    }

    /// Weight moved in this set (reps x weight)
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

impl Default for WorkoutSet {
    fn default() -> Self {
        Self::new()
    }
}

/// An exercise performed within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub exercise_name: String,
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    /// Start an exercise with one empty set
    pub fn new(exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.id.to_string(),
            exercise_name: exercise.name.to_string(),
            sets: vec![WorkoutSet::new()],
        }
    }

    /// Heaviest weight across the sets, if there are any
    pub fn max_weight(&self) -> Option<f64> {
        self.sets
            .iter()
            .map(|s| s.weight)
            .fold(None, |max, w| Some(max.map_or(w, |m: f64| m.max(w))))
    }

    /// Number of sets marked complete
    pub fn completed_set_count(&self) -> usize {
        self.sets.iter().filter(|s| s.completed).count()
    }
}

/// One day's workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub date: NaiveDate,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// Create an empty workout for a date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: WorkoutId::new(),
            date,
            exercises: Vec::new(),
        }
    }

    /// Total number of sets
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Total number of completed sets
    pub fn completed_set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.completed_set_count()).sum()
    }

    /// Total volume across all sets
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .map(WorkoutSet::volume)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn bench() -> &'static Exercise {
        Exercise::find("Bench Press").unwrap()
    }

    #[test]
    fn test_new_exercise_has_one_empty_set() {
        let entry = WorkoutExercise::new(bench());
        assert_eq!(entry.exercise_id, "1");
        assert_eq!(entry.sets.len(), 1);
        assert_eq!(entry.sets[0].reps, 0);
        assert_eq!(entry.sets[0].weight, 0.0);
        assert!(!entry.sets[0].completed);
    }

    #[test]
    fn test_max_weight() {
        let mut entry = WorkoutExercise::new(bench());
        entry.sets[0].weight = 40.0;
        entry.sets.push(WorkoutSet {
            weight: 62.5,
            ..WorkoutSet::new()
        });
        assert_eq!(entry.max_weight(), Some(62.5));

        entry.sets.clear();
        assert_eq!(entry.max_weight(), None);
    }

    #[test]
    fn test_totals() {
        let mut workout = Workout::new(date("2024-01-01"));
        let mut entry = WorkoutExercise::new(bench());
        entry.sets[0].reps = 10;
        entry.sets[0].weight = 50.0;
        entry.sets[0].completed = true;
        entry.sets.push(WorkoutSet {
            reps: 8,
            weight: 60.0,
            ..WorkoutSet::new()
        });
        workout.exercises.push(entry);

        assert_eq!(workout.set_count(), 2);
        assert_eq!(workout.completed_set_count(), 1);
        assert_eq!(workout.total_volume(), 980.0);
    }
}
