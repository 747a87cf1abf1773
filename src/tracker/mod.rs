//! Workout tracker
//!
//! An in-memory tracker: a history of saved workouts plus one "current"
//! workout bound to the selected date. Nothing here touches the disk; a
//! tracking session lives as long as the process.

pub mod progress;
pub mod session;
pub mod state;

pub use progress::{progress_series, ProgressPoint};
pub use session::{TrackerCommand, TrackerSession};
pub use state::{SetField, WorkoutTracker};
