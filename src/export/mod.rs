//! Export module for BodAI
//!
//! - CSV: tracked workouts, one row per set (spreadsheet-compatible)
//! - JSON: submitted profiles, machine-readable
//! - YAML: submitted profiles, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_workout_history, write_workout_history_csv, WORKOUT_CSV_HEADER};
pub use json::{export_profiles_json, ProfileExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_profiles_yaml;
