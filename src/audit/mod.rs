//! Audit logging for BodAI
//!
//! Registrations and profile submissions are appended to a line-delimited
//! JSON log (`audit.log`). Entries never carry password material: callers
//! log the public view of a user.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
