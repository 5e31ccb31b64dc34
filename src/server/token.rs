//! Session token issuing and verification.
//!
//! Tokens are HS256-signed JWTs. The subject claim is the SHA-256 hash of the
//! login identifier, the same value used as the session record's primary key.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::server::error::AppError;

/// Claims carried by every session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Hashed login identifier.
    pub sub: String,
    /// Display name read from the directory at login.
    pub name: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique per token so two logins within the same second never collide.
    pub jti: String,
}

/// Computes the subject for a login identifier.
///
/// Lowercase hex SHA-256 of the identifier bytes. Deterministic, so repeated
/// logins by the same person land on the same session record.
pub fn subject_hash(identifier: &str) -> String {
    hex::encode(Sha256::digest(identifier.as_bytes()))
}

pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: chrono::Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issues a token for `subject` valid from now for the configured lifetime.
    pub fn issue(&self, subject: &str, name: &str) -> Result<String, AppError> {
        self.issue_at(subject, name, Utc::now())
    }

    /// Issues a token as if it had been signed at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        name: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = SessionClaims {
            sub: subject.to_string(),
            name: name.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Verifies signature and expiry.
    ///
    /// # Returns
    /// - `Some(SessionClaims)` - Token is authentic and unexpired
    /// - `None` - Malformed, tampered, signed with another key, or expired
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(err) => {
                tracing::debug!("Token rejected: {}", err);
                None
            }
        }
    }
}
