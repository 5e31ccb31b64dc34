//! Handles built once in `main` and handed to every handler.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{directory::DirectoryClient, token::TokenIssuer};

/// Cloned per request; the pool and both `Arc`s share their targets.
#[derive(Clone)]
pub struct AppState {
    /// Pool for session records and content.
    pub db: DatabaseConnection,

    /// Factory for per-login directory connections.
    pub directory: Arc<dyn DirectoryClient>,

    /// Issues and verifies session tokens with the configured secret.
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        directory: Arc<dyn DirectoryClient>,
        tokens: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            db,
            directory,
            tokens,
        }
    }
}
