use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:1323";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

const DEFAULT_LDAP_URL: &str = "ldap://ad.unsw.edu.au";
const DEFAULT_LDAP_BIND_SUFFIX: &str = "@ad.unsw.edu.au";
const DEFAULT_LDAP_SEARCH_BASE: &str = "OU=IDM_People,OU=IDM,DC=ad,DC=unsw,DC=edu,DC=au";
const DEFAULT_LDAP_NAME_ATTRIBUTE: &str = "givenName";
const DEFAULT_DIRECTORY_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the institutional directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub url: String,
    /// Appended to the identifier to form the bind name.
    pub bind_suffix: String,
    pub search_base: String,
    /// Attribute holding the user's display name.
    pub name_attribute: String,
    /// Bound on connecting and on each directory operation.
    pub timeout: Duration,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,

    pub directory: DirectoryConfig,

    /// Allowed browser origin; `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let token_ttl_hours = parse_number(
            "TOKEN_TTL_HOURS",
            lookup("TOKEN_TTL_HOURS"),
            DEFAULT_TOKEN_TTL_HOURS,
        )?;
        if token_ttl_hours <= 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "TOKEN_TTL_HOURS".to_string(),
                reason: "must be a positive number of hours".to_string(),
            }
            .into());
        }

        let timeout_secs = parse_number(
            "DIRECTORY_TIMEOUT_SECS",
            lookup("DIRECTORY_TIMEOUT_SECS"),
            DEFAULT_DIRECTORY_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            jwt_secret: required("JWT_SECRET")?,
            token_ttl: chrono::Duration::hours(token_ttl_hours),
            directory: DirectoryConfig {
                url: optional("LDAP_URL", DEFAULT_LDAP_URL),
                bind_suffix: optional("LDAP_BIND_SUFFIX", DEFAULT_LDAP_BIND_SUFFIX),
                search_base: optional("LDAP_SEARCH_BASE", DEFAULT_LDAP_SEARCH_BASE),
                name_attribute: optional("LDAP_NAME_ATTRIBUTE", DEFAULT_LDAP_NAME_ATTRIBUTE),
                timeout: Duration::from_secs(timeout_secs),
            },
            cors_origin: lookup("CORS_ORIGIN").filter(|v| !v.is_empty()),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a number", raw),
        }),
    }
}
