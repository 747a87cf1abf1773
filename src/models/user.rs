//! User model
//!
//! Registered users of the API. The stored record carries the password hash;
//! everything handed back to callers goes through [`PublicUser`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Normalized email address (trimmed, lowercase)
    pub email: String,

    /// Argon2id PHC string
    pub password_hash: String,

    /// When the user registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from an already-hashed password
    pub fn new(name: impl Into<String>, email: &str, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: Self::normalize_email(email),
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Normalize an email address for matching
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// The view of this user that is safe to return or log
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// The `{id, name, email}` user record returned by registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
