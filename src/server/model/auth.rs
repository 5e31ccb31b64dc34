//! Login parameters and outcomes.

use crate::model::auth::LoginDto;

/// Credentials submitted to the login endpoint. Never persisted or logged.
#[derive(Clone)]
pub struct LoginParam {
    pub identifier: String,
    pub secret: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            identifier: dto.zid.trim().to_string(),
            secret: dto.password,
        }
    }
}

/// What a successful login did to the caller's session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginKind {
    /// No record existed; one was inserted.
    Created,
    /// The stored token was still valid and was left as is.
    Retained,
    /// The stored token had expired or failed verification and was replaced.
    Refreshed,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Freshly issued token, returned to the caller on every branch.
    pub token: String,
    pub kind: LoginKind,
}
