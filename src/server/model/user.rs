//! Session record domain models and parameters.
//!
//! A session record exists per person who has ever logged in, keyed by the hash
//! of their login identifier. It stores the most recently issued token and the
//! person's role.

use chrono::{DateTime, Utc};

use crate::model::auth::CurrentUserDto;

/// Role assigned to a session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parses a stored role; unknown values fall back to `User`.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Stored session record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// SHA-256 hash of the login identifier.
    pub subject: String,
    /// Token most recently written for this subject.
    pub token: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            subject: entity.subject,
            token: entity.token,
            role: Role::from_stored(&entity.role),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a session record on first login.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub subject: String,
    pub token: String,
    pub role: Role,
}

/// Caller identity resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
    /// Display name carried in the token claims.
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn into_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            subject: self.subject,
            name: self.name,
            role: self.role.as_str().to_string(),
        }
    }
}
