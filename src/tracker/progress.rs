//! Progress derivation
//!
//! Turns saved workouts into a max-weight-per-day series for one exercise.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Workout;

/// Heaviest weight lifted for an exercise on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub max_weight: f64,
}

/// Build the progress series for `exercise_name`
///
/// One point per saved workout containing the exercise (with at least one
/// set), sorted by date. A single point is not a trend, so series shorter
/// than two points come back empty.
pub fn progress_series(workouts: &[Workout], exercise_name: &str) -> Vec<ProgressPoint> {
    let mut points: Vec<ProgressPoint> = workouts
        .iter()
        .filter_map(|workout| {
            let max_weight = workout
                .exercises
                .iter()
                .filter(|e| e.exercise_name == exercise_name)
                .filter_map(|e| e.max_weight())
                .reduce(f64::max)?;
            Some(ProgressPoint {
                date: workout.date,
                max_weight,
            })
        })
        .collect();

    if points.len() < 2 {
        return Vec::new();
    }

    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}
