//! Workout display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Workout, CATALOG};
use crate::tracker::ProgressPoint;

/// Format a workout with numbered exercises and sets
pub fn format_workout(workout: &Workout) -> String {
    let mut output = format!("Workout for {}\n", workout.date.format("%A, %Y-%m-%d"));

    if workout.exercises.is_empty() {
        output.push_str("  No exercises yet. Use 'add <exercise>' to start.");
        return output;
    }

    for (i, entry) in workout.exercises.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, entry.exercise_name));
        for (j, set) in entry.sets.iter().enumerate() {
            let mark = if set.completed { "x" } else { " " };
            output.push_str(&format!(
                "     [{}] Set {}: {} reps @ {} kg\n",
                mark,
                j + 1,
                set.reps,
                set.weight
            ));
        }
    }

    output.push_str(&format!(
        "  {}/{} sets complete, volume {} kg",
        workout.completed_set_count(),
        workout.set_count(),
        workout.total_volume()
    ));
    output
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Exercises")]
    exercises: String,
    #[tabled(rename = "Sets done")]
    sets: String,
    #[tabled(rename = "Volume (kg)")]
    volume: String,
}

/// Format saved workouts as a table, in the order given
pub fn format_history(workouts: &[&Workout]) -> String {
    if workouts.is_empty() {
        return "No saved workouts.".to_string();
    }

    let rows = workouts.iter().map(|w| HistoryRow {
        date: w.date.format("%Y-%m-%d").to_string(),
        exercises: w
            .exercises
            .iter()
            .map(|e| e.exercise_name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        sets: format!("{}/{}", w.completed_set_count(), w.set_count()),
        volume: w.total_volume().to_string(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a progress series for one exercise
pub fn format_progress(exercise_name: &str, series: &[ProgressPoint]) -> String {
    if series.is_empty() {
        return format!(
            "Not enough data for {} yet: save it in at least two workouts.",
            exercise_name
        );
    }

    let mut output = format!("{} progress (max weight)\n", exercise_name);
    for point in series {
        output.push_str(&format!(
            "  {}  {} kg\n",
            point.date.format("%Y-%m-%d"),
            point.max_weight
        ));
    }
    output.pop();
    output
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Exercise")]
    name: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Muscle")]
    muscle: &'static str,
}

/// Format the exercise catalog as a table
pub fn format_catalog() -> String {
    let rows = CATALOG.iter().map(|e| CatalogRow {
        id: e.id,
        name: e.name,
        category: e.category.to_string(),
        muscle: e.muscle,
    });
    Table::new(rows).with(Style::psql()).to_string()
}
