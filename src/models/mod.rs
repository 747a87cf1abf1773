//! Core data models for BodAI
//!
//! This module contains the data structures of the fitness domain:
//! onboarding profiles, the exercise catalog, workouts and users.

pub mod exercise;
pub mod ids;
pub mod profile;
pub mod user;
pub mod workout;

pub use exercise::{Exercise, ExerciseCategory, CATALOG};
pub use ids::{ProfileId, SetId, UserId, WorkoutId};
pub use profile::{
    Equipment, Goal, Lifestyle, Profile, ProfileField, SubmittedProfile, WorkoutLocation,
};
pub use user::{PublicUser, User};
pub use workout::{Workout, WorkoutExercise, WorkoutSet};
