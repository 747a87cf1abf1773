//! User registration
//!
//! Accepts a name, email and password, rejects incomplete requests and
//! already-registered emails, and stores the user with an Argon2id hash.

use serde::Deserialize;

use crate::audit::EntityType;
use crate::crypto::{hash_password, PasswordHashParams};
use crate::error::{BodaiError, BodaiResult};
use crate::models::{PublicUser, User, UserId};
use crate::storage::Storage;

/// Message for a request with a missing or blank field
pub const MISSING_FIELDS: &str = "Missing fields";

/// Registration request body
///
/// Every field is optional at the type level so an incomplete body is
/// reported as "Missing fields" rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Build a complete request
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

fn required(field: &Option<String>) -> BodaiResult<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| BodaiError::Validation(MISSING_FIELDS.into()))
}

/// Service for user registration and lookup
pub struct RegistrationService<'a> {
    storage: &'a Storage,
    params: &'a PasswordHashParams,
}

impl<'a> RegistrationService<'a> {
    /// Create a new registration service
    pub fn new(storage: &'a Storage, params: &'a PasswordHashParams) -> Self {
        Self { storage, params }
    }

    /// Register a new user
    pub fn register(&self, request: &RegisterRequest) -> BodaiResult<PublicUser> {
        let name = required(&request.name)?;
        let email = required(&request.email)?;
        // Passwords are taken as typed; only an empty one is rejected
        let password = request
            .password
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| BodaiError::Validation(MISSING_FIELDS.into()))?;

        if self.storage.users.get_by_email(email)?.is_some() {
            return Err(BodaiError::Duplicate {
                entity_type: "User",
                identifier: User::normalize_email(email),
            });
        }

        let hash = hash_password(password, self.params)?;
        let user = User::new(name, email, hash);
        let public = user.public();

        // Re-checks the email under the write lock
        self.storage.users.insert(user)?;
        if let Err(e) = self.storage.users.save() {
            // Not on disk, so not registered; a retry must not see a duplicate
            self.storage.users.remove(public.id)?;
            return Err(e);
        }

        self.storage.log_create(
            EntityType::User,
            public.id.to_string(),
            Some(public.email.clone()),
            &public,
        )?;

        tracing::info!(user_id = %public.id, "registered user");
        Ok(public)
    }

    /// All registered users
    pub fn list(&self) -> BodaiResult<Vec<User>> {
        self.storage.users.get_all()
    }

    /// Find a user by email or ID
    pub fn find(&self, identifier: &str) -> BodaiResult<Option<User>> {
        if let Some(user) = self.storage.users.get_by_email(identifier)? {
            return Ok(Some(user));
        }
        match identifier.parse::<UserId>() {
            Ok(id) => self.storage.users.get(id),
            Err(_) => Ok(None),
        }
    }
}
