//! CSV export of tracked workouts

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{BodaiError, BodaiResult};
use crate::models::Workout;

/// Column names of the workout CSV
pub const WORKOUT_CSV_HEADER: [&str; 6] = ["date", "exercise", "set", "reps", "weight", "completed"];

/// Write workouts as CSV, one row per set
///
/// Set numbers are 1-based. Workouts keep the order they are given in.
pub fn write_workout_history_csv<W: Write>(workouts: &[&Workout], writer: W) -> BodaiResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(WORKOUT_CSV_HEADER)?;

    for workout in workouts {
        let date = workout.date.format("%Y-%m-%d").to_string();
        for entry in &workout.exercises {
            for (i, set) in entry.sets.iter().enumerate() {
                csv.write_record([
                    date.clone(),
                    entry.exercise_name.clone(),
                    (i + 1).to_string(),
                    set.reps.to_string(),
                    set.weight.to_string(),
                    set.completed.to_string(),
                ])?;
            }
        }
    }

    csv.flush()
        .map_err(|e| BodaiError::Export(format!("Failed to flush CSV: {}", e)))
}

/// Write workouts to a CSV file at `path`
pub fn export_workout_history(workouts: &[&Workout], path: &Path) -> BodaiResult<()> {
    let file = File::create(path)
        .map_err(|e| BodaiError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_workout_history_csv(workouts, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, WorkoutExercise};
    use chrono::NaiveDate;

    #[test]
    fn test_one_row_per_set() {
        let mut workout = Workout::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut entry = WorkoutExercise::new(Exercise::find("Bench Press").unwrap());
        entry.sets[0].reps = 10;
        entry.sets[0].weight = 40.0;
        entry.sets[0].completed = true;
        entry.sets.push(crate::models::WorkoutSet::new());
        entry.sets[1].reps = 8;
        entry.sets[1].weight = 62.5;
        workout.exercises.push(entry);

        let mut out = Vec::new();
        write_workout_history_csv(&[&workout], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "date,exercise,set,reps,weight,completed",
                "2024-01-01,Bench Press,1,10,40,true",
                "2024-01-01,Bench Press,2,8,62.5,false",
            ]
        );
    }

    #[test]
    fn test_empty_history_has_header_only() {
        let mut out = Vec::new();
        write_workout_history_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "date,exercise,set,reps,weight,completed\n");
    }
}
