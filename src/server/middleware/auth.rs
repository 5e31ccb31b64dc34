use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::AuthenticatedUser,
    token::TokenIssuer,
};

/// Resolves the caller of a request from its bearer token.
///
/// A token is accepted when its signature and expiry verify and a session
/// record exists for its subject. The record supplies the role; the display
/// name comes from the token claims.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenIssuer,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenIssuer, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Caller identified
    /// - `Err(AuthErr(MissingToken))` - No `Authorization: Bearer` header
    /// - `Err(AuthErr(InvalidToken))` - Token tampered, foreign or expired
    /// - `Err(AuthErr(UserNotFound))` - No session record for the token's subject
    pub async fn require(&self) -> Result<AuthenticatedUser, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(claims) = self.tokens.verify(token) else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_subject(&claims.sub)
            .await?
        else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        Ok(AuthenticatedUser {
            subject: user.subject,
            name: claims.name,
            role: user.role,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
