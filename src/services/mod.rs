//! Service layer for BodAI
//!
//! Services hold the business rules on top of the storage layer: input
//! validation, password hashing and audit logging.

pub mod profile;
pub mod registration;

pub use profile::ProfileService;
pub use registration::{RegisterRequest, RegistrationService};
