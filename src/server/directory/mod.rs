//! Institutional directory access.
//!
//! The login flow talks to the directory through `DirectoryClient`, which opens
//! one `DirectoryConnection` per login. `ldap::LdapDirectory` is the production
//! adapter; tests use the in-process `mock::MockDirectory`.

pub mod ldap;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::server::error::directory::DirectoryError;

/// Factory for directory connections, shared across requests.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Opens a connection for a single login.
    async fn connect(&self) -> Result<Box<dyn DirectoryConnection>, DirectoryError>;

    /// Attribute holding a user's display name.
    fn name_attribute(&self) -> &str;
}

/// A single open directory connection.
///
/// Callers must call `close` once they are done, on success and failure alike.
#[async_trait]
pub trait DirectoryConnection: Send {
    /// Checks the identifier/secret pair.
    ///
    /// # Returns
    /// - `Ok(())` - Credentials accepted
    /// - `Err(DirectoryError::InvalidCredentials)` - Credentials rejected
    /// - `Err(DirectoryError::Unavailable | Timeout)` - Directory could not answer
    async fn verify(&mut self, identifier: &str, secret: &str) -> Result<(), DirectoryError>;

    /// Reads a single attribute of the entry matching `identifier`.
    ///
    /// Returns `Ok(None)` when no entry matches or the entry lacks the attribute.
    async fn lookup_attribute(
        &mut self,
        identifier: &str,
        attribute: &str,
    ) -> Result<Option<String>, DirectoryError>;

    /// Releases the connection. Errors are logged, not returned.
    async fn close(&mut self);
}
