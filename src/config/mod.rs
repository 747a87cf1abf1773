//! Configuration module for BodAI
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Server, password hashing and membership preferences

pub mod paths;
pub mod settings;

pub use paths::BodaiPaths;
pub use settings::Settings;
