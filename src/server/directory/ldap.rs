use async_trait::async_trait;
use ldap3::{ldap_escape, Ldap, LdapConnAsync, LdapConnSettings, LdapError, Scope, SearchEntry};

use crate::server::{
    config::DirectoryConfig,
    directory::{DirectoryClient, DirectoryConnection},
    error::directory::DirectoryError,
};

/// LDAP result code for a rejected simple bind.
const INVALID_CREDENTIALS: u32 = 49;

/// Directory client backed by an LDAP server.
pub struct LdapDirectory {
    config: DirectoryConfig,
}

impl LdapDirectory {
    pub fn new(config: DirectoryConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DirectoryClient for LdapDirectory {
    async fn connect(&self) -> Result<Box<dyn DirectoryConnection>, DirectoryError> {
        let settings = LdapConnSettings::new().set_conn_timeout(self.config.timeout);
        let (conn, ldap) = LdapConnAsync::with_settings(settings, &self.config.url)
            .await
            .map_err(map_ldap_error)?;

        tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                tracing::warn!("LDAP connection ended with error: {}", e);
            }
        });

        Ok(Box::new(LdapConnection {
            ldap,
            config: self.config.clone(),
        }))
    }

    fn name_attribute(&self) -> &str {
        &self.config.name_attribute
    }
}

pub struct LdapConnection {
    ldap: Ldap,
    config: DirectoryConfig,
}

#[async_trait]
impl DirectoryConnection for LdapConnection {
    async fn verify(&mut self, identifier: &str, secret: &str) -> Result<(), DirectoryError> {
        let bind_name = format!("{}{}", identifier, self.config.bind_suffix);

        let result = self
            .ldap
            .with_timeout(self.config.timeout)
            .simple_bind(&bind_name, secret)
            .await
            .map_err(map_ldap_error)?;

        bind_result(result.rc, &result.text)
    }

    async fn lookup_attribute(
        &mut self,
        identifier: &str,
        attribute: &str,
    ) -> Result<Option<String>, DirectoryError> {
        let filter = format!("(cn={})", ldap_escape(identifier));

        let (entries, _) = self
            .ldap
            .with_timeout(self.config.timeout)
            .search(
                &self.config.search_base,
                Scope::Subtree,
                &filter,
                vec![attribute],
            )
            .await
            .map_err(map_ldap_error)?
            .success()
            .map_err(map_ldap_error)?;

        let value = entries.into_iter().find_map(|entry| {
            SearchEntry::construct(entry)
                .attrs
                .into_iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(attribute))
                .and_then(|(_, values)| values.into_iter().next())
        });

        Ok(value)
    }

    async fn close(&mut self) {
        if let Err(e) = self.ldap.unbind().await {
            tracing::debug!("LDAP unbind failed: {}", e);
        }
    }
}

/// Maps a simple-bind result code onto the directory outcome.
fn bind_result(rc: u32, text: &str) -> Result<(), DirectoryError> {
    match rc {
        0 => Ok(()),
        INVALID_CREDENTIALS => Err(DirectoryError::InvalidCredentials),
        rc => Err(DirectoryError::Unavailable(format!(
            "bind failed with result code {}: {}",
            rc, text
        ))),
    }
}

fn map_ldap_error(err: LdapError) -> DirectoryError {
    match err {
        LdapError::Timeout { .. } => DirectoryError::Timeout,
        other => DirectoryError::Unavailable(other.to_string()),
    }
}
