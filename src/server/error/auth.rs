use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::directory::DirectoryError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login form is missing the identifier or the password.
    ///
    /// Rejected before the directory is contacted; an empty password would
    /// otherwise be accepted by LDAP as an anonymous bind.
    #[error("Login request is missing the identifier or password")]
    MissingCredentials,

    /// Directory verification or attribute lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Request did not carry a bearer token.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry verification.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Token verified but no session record exists for its subject.
    #[error("No session record for subject {0}")]
    UserNotFound(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredentials` → 400 Bad Request
/// - `Directory(InvalidCredentials)` → 401 Unauthorized
/// - `Directory(Unavailable | Timeout)` → 503 Service Unavailable
/// - `MissingToken` / `InvalidToken` / `UserNotFound` → 401 Unauthorized
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Both zid and password are required",
            ),
            Self::Directory(DirectoryError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, "Invalid zid or password")
            }
            Self::Directory(DirectoryError::Unavailable(_) | DirectoryError::Timeout) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service is unavailable, please try again later",
            ),
            Self::MissingToken | Self::InvalidToken | Self::UserNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
