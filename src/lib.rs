//! BodAI - fitness onboarding, workout tracking and membership tooling
//!
//! This library provides the core functionality behind the `bodai` binary:
//! an onboarding wizard that collects a fitness profile step by step, an
//! in-memory workout tracker with progress charts, a small HTTP API for
//! user registration and profile submission, and the state machine behind
//! the wallet membership widget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (profiles, users, workouts, exercises)
//! - `storage`: JSON file storage layer
//! - `services`: Registration and profile submission
//! - `audit`: Audit logging system
//! - `onboarding`: The onboarding wizard and its terminal front end
//! - `tracker`: Workout tracking and progress derivation
//! - `membership`: Wallet membership purchase flow
//! - `server`: HTTP API
//! - `display`, `export`, `cli`: Terminal output, exports and commands
//!
//! # Example
//!
//! ```rust,ignore
//! use bodai::config::{paths::BodaiPaths, settings::Settings};
//!
//! let paths = BodaiPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod membership;
pub mod models;
pub mod onboarding;
pub mod server;
pub mod services;
pub mod storage;
pub mod tracker;

pub use error::{BodaiError, BodaiResult};
