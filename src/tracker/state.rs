//! Tracker state and its mutation entry points
//!
//! Positions are zero-based. A position that is out of range, or any edit
//! made before a date is selected, is a no-op reported as `false`.

use chrono::NaiveDate;

use crate::models::{Exercise, Workout, WorkoutExercise, WorkoutSet};

use super::progress::{progress_series, ProgressPoint};

/// Which value of a set to overwrite
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetField {
    Reps(u32),
    Weight(f64),
}

/// Saved workouts plus the workout being edited
#[derive(Debug, Clone, Default)]
pub struct WorkoutTracker {
    saved: Vec<Workout>,
    current: Option<Workout>,
}

impl WorkoutTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// The workout being edited, if a date has been selected
    pub fn current(&self) -> Option<&Workout> {
        self.current.as_ref()
    }

    /// Saved workouts in save order
    pub fn saved(&self) -> &[Workout] {
        &self.saved
    }

    /// Make `date` the current workout
    ///
    /// Loads a copy of the saved workout for that date, or starts an empty
    /// one. Unsaved edits to the previous current workout are discarded.
    pub fn select_date(&mut self, date: NaiveDate) -> &Workout {
        let workout = self
            .saved
            .iter()
            .find(|w| w.date == date)
            .cloned()
            .unwrap_or_else(|| Workout::new(date));
        self.current.insert(workout)
    }

    /// Append a catalog exercise with one empty set
    ///
    /// No-op when nothing is selected or the id is not in the catalog.
    pub fn add_exercise(&mut self, exercise_id: Option<&str>) -> bool {
        let Some(exercise) = exercise_id.and_then(Exercise::by_id) else {
            return false;
        };
        match self.current.as_mut() {
            Some(workout) => {
                workout.exercises.push(WorkoutExercise::new(exercise));
                true
            }
            None => false,
        }
    }

    fn exercise_mut(&mut self, exercise: usize) -> Option<&mut WorkoutExercise> {
        self.current.as_mut()?.exercises.get_mut(exercise)
    }

    fn set_mut(&mut self, exercise: usize, set: usize) -> Option<&mut WorkoutSet> {
        self.exercise_mut(exercise)?.sets.get_mut(set)
    }

    /// Append an empty set to an exercise
    pub fn add_set(&mut self, exercise: usize) -> bool {
        match self.exercise_mut(exercise) {
            Some(entry) => {
                entry.sets.push(WorkoutSet::new());
                true
            }
            None => false,
        }
    }

    /// Overwrite the reps or weight of a set
    pub fn update_set(&mut self, exercise: usize, set: usize, field: SetField) -> bool {
        let Some(target) = self.set_mut(exercise, set) else {
            return false;
        };
        match field {
            SetField::Reps(reps) => target.reps = reps,
            SetField::Weight(weight) => target.weight = weight,
        }
        true
    }

    /// Flip a set's completion flag
    pub fn toggle_set_complete(&mut self, exercise: usize, set: usize) -> bool {
        match self.set_mut(exercise, set) {
            Some(target) => {
                target.completed = !target.completed;
                true
            }
            None => false,
        }
    }

    /// Store a copy of the current workout in the history
    ///
    /// Replaces any saved workout with the same id or the same date, so the
    /// history never holds two workouts for one day.
    pub fn save(&mut self) -> bool {
        let Some(current) = self.current.clone() else {
            return false;
        };
        self.saved
            .retain(|w| w.id != current.id && w.date != current.date);
        self.saved.push(current);
        true
    }

    /// Saved workouts, newest date first
    pub fn history(&self) -> Vec<&Workout> {
        let mut history: Vec<_> = self.saved.iter().collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Exercise names across the history, in first-seen order
    pub fn exercise_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in self.saved.iter().flat_map(|w| w.exercises.iter()) {
            if !names.contains(&entry.exercise_name.as_str()) {
                names.push(&entry.exercise_name);
            }
        }
        names
    }

    /// Max-weight progress for an exercise across saved workouts
    pub fn progress(&self, exercise_name: &str) -> Vec<ProgressPoint> {
        progress_series(&self.saved, exercise_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_saved_workout_survives_date_change() {
        let mut tracker = WorkoutTracker::new();
        tracker.select_date(date("2024-01-01"));
        assert!(tracker.add_exercise(Some("1")));
        assert!(tracker.add_set(0));
        assert!(tracker.update_set(0, 1, SetField::Reps(8)));
        assert!(tracker.update_set(0, 1, SetField::Weight(60.0)));
        assert!(tracker.save());

        tracker.select_date(date("2024-01-02"));
        assert!(tracker.current().unwrap().exercises.is_empty());

        let saved = &tracker.saved()[0];
        assert_eq!(saved.date, date("2024-01-01"));
        assert_eq!(saved.exercises[0].exercise_name, "Bench Press");
        assert_eq!(saved.exercises[0].sets.len(), 2);
        assert_eq!(saved.exercises[0].sets[1].reps, 8);
        assert_eq!(saved.exercises[0].sets[1].weight, 60.0);
        assert_eq!(saved.exercises[0].sets[0].reps, 0);
    }

    #[test]
    fn test_unsaved_edits_are_discarded() {
        let mut tracker = WorkoutTracker::new();
        tracker.select_date(date("2024-01-01"));
        tracker.add_exercise(Some("7"));
        tracker.save();

        // Edit without saving, then move away and back
        tracker.add_set(0);
        tracker.toggle_set_complete(0, 0);
        tracker.select_date(date("2024-01-05"));
        let reloaded = tracker.select_date(date("2024-01-01"));

        assert_eq!(reloaded.exercises[0].sets.len(), 1);
        assert!(!reloaded.exercises[0].sets[0].completed);
    }

    #[test]
    fn test_save_replaces_same_date() {
        let mut tracker = WorkoutTracker::new();
        tracker.select_date(date("2024-01-01"));
        tracker.add_exercise(Some("1"));
        tracker.save();

        tracker.select_date(date("2024-01-01"));
        tracker.add_exercise(Some("4"));
        tracker.save();

        assert_eq!(tracker.saved().len(), 1);
        assert_eq!(tracker.saved()[0].exercises.len(), 2);
    }

    #[test]
    fn test_edits_without_date_are_noops() {
        let mut tracker = WorkoutTracker::new();
        assert!(!tracker.add_exercise(Some("1")));
        assert!(!tracker.add_set(0));
        assert!(!tracker.update_set(0, 0, SetField::Reps(5)));
        assert!(!tracker.toggle_set_complete(0, 0));
        assert!(!tracker.save());
        assert!(tracker.saved().is_empty());
    }

    #[test]
    fn test_out_of_range_and_unknown_exercise() {
        let mut tracker = WorkoutTracker::new();
        tracker.select_date(date("2024-01-01"));

        assert!(!tracker.add_exercise(None));
        assert!(!tracker.add_exercise(Some("99")));
        assert!(tracker.current().unwrap().exercises.is_empty());

        tracker.add_exercise(Some("1"));
        assert!(!tracker.add_set(1));
        assert!(!tracker.update_set(0, 3, SetField::Weight(50.0)));
        assert!(!tracker.toggle_set_complete(2, 0));
        assert!(tracker.toggle_set_complete(0, 0));
        assert!(tracker.current().unwrap().exercises[0].sets[0].completed);
    }

    #[test]
    fn test_history_and_exercise_names() {
        let mut tracker = WorkoutTracker::new();
        for (day, exercise) in [("2024-01-03", "7"), ("2024-01-01", "1"), ("2024-01-02", "7")] {
            tracker.select_date(date(day));
            tracker.add_exercise(Some(exercise));
            tracker.save();
        }

        let dates: Vec<_> = tracker.history().iter().map(|w| w.date).collect();
        assert_eq!(
            dates,
            [date("2024-01-03"), date("2024-01-02"), date("2024-01-01")]
        );
        assert_eq!(tracker.exercise_names(), ["Squats", "Bench Press"]);
    }
}
