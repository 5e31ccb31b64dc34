use thiserror::Error;

/// Failures reported by the institutional directory.
///
/// Every variant is recoverable and scoped to the login request that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The directory rejected the identifier/secret pair.
    #[error("Directory rejected the supplied credentials")]
    InvalidCredentials,

    /// The directory could not be reached or returned an unexpected result.
    #[error("Directory service unavailable: {0}")]
    Unavailable(String),

    /// The directory did not answer within the configured timeout.
    #[error("Directory request timed out")]
    Timeout,
}
