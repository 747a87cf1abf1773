//! Cryptographic helpers for BodAI
//!
//! Provides Argon2id password hashing for the registration service and a
//! zeroizing string type for passwords read from the terminal.

pub mod password;
pub mod secure_memory;

pub use password::{hash_password, verify_password, PasswordHashParams};
pub use secure_memory::SecureString;
