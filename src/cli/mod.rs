//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod profile;
pub mod serve;
pub mod session;
pub mod user;

pub use audit::handle_audit_command;
pub use profile::{handle_profile_command, ProfileCommands};
pub use serve::handle_serve_command;
pub use session::{handle_onboard_command, handle_track_command};
pub use user::{handle_user_command, UserCommands};
