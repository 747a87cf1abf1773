//! Display formatting for terminal output
//!
//! Turns models into the tables and summaries the CLI prints.

pub mod profile;
pub mod user;
pub mod workout;

pub use profile::{format_profile, format_profile_list};
pub use user::{format_user_details, format_user_list};
pub use workout::{format_catalog, format_history, format_progress, format_workout};
