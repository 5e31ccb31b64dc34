use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    directory::{DirectoryClient, DirectoryConnection},
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginKind, LoginOutcome, LoginParam},
        user::{CreateUserParam, Role},
    },
    token::{subject_hash, TokenIssuer},
};

/// Service for directory-backed login and session record maintenance.
///
/// Verifies credentials against the directory, issues a session token and
/// creates or refreshes the caller's session record.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn DirectoryClient,
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `directory` - Directory used to verify credentials and read display names
    /// - `tokens` - Issuer holding the signing key
    pub fn new(
        db: &'a DatabaseConnection,
        directory: &'a dyn DirectoryClient,
        tokens: &'a TokenIssuer,
    ) -> Self {
        Self {
            db,
            directory,
            tokens,
        }
    }

    /// Logs a user in and returns a freshly issued session token.
    ///
    /// The session record is then reconciled with the new token:
    /// - no record: one is inserted with role `user`
    /// - record whose stored token still verifies: left untouched
    /// - record whose stored token is expired or invalid: token overwritten
    ///
    /// The fresh token is returned in every case.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome)` - Token and the branch taken
    /// - `Err(AppError::AuthErr(MissingCredentials))` - Empty identifier or secret
    /// - `Err(AppError::AuthErr(Directory(_)))` - Directory rejected or failed; no record touched
    /// - `Err(AppError::DbErr)` - Session record could not be read or written
    pub async fn login(&self, param: LoginParam) -> Result<LoginOutcome, AppError> {
        if param.identifier.is_empty() || param.secret.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let name = self.authenticate(&param).await?;
        let subject = subject_hash(&param.identifier);
        let token = self.tokens.issue(&subject, &name)?;

        let repo = UserRepository::new(self.db);
        let kind = match repo.find_by_subject(&subject).await? {
            None => {
                repo.create(CreateUserParam {
                    subject: subject.clone(),
                    token: token.clone(),
                    role: Role::User,
                })
                .await?;
                LoginKind::Created
            }
            Some(user) if self.tokens.verify(&user.token).is_some() => LoginKind::Retained,
            Some(_) => {
                repo.update_token(&subject, &token).await?;
                LoginKind::Refreshed
            }
        };

        tracing::info!("Login for subject {} ({:?})", subject, kind);

        Ok(LoginOutcome { token, kind })
    }

    /// Verifies credentials and reads the display name over one connection.
    ///
    /// The connection is closed whether or not the directory calls succeed.
    async fn authenticate(&self, param: &LoginParam) -> Result<String, AuthError> {
        let mut conn = self.directory.connect().await?;

        let result = verify_and_lookup(
            conn.as_mut(),
            &param.identifier,
            &param.secret,
            self.directory.name_attribute(),
        )
        .await;

        conn.close().await;

        result
    }
}

async fn verify_and_lookup(
    conn: &mut dyn DirectoryConnection,
    identifier: &str,
    secret: &str,
    name_attribute: &str,
) -> Result<String, AuthError> {
    conn.verify(identifier, secret).await?;

    match conn.lookup_attribute(identifier, name_attribute).await? {
        Some(name) => Ok(name),
        None => {
            tracing::warn!(
                "Directory entry has no {} attribute; issuing token with empty name",
                name_attribute
            );
            Ok(String::new())
        }
    }
}
