//! In-process directory for service and router tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;

use crate::server::{
    directory::{DirectoryClient, DirectoryConnection},
    error::directory::DirectoryError,
};

#[derive(Default)]
struct Counters {
    connects: AtomicUsize,
    verifies: AtomicUsize,
    lookups: AtomicUsize,
    closes: AtomicUsize,
}

/// Directory double holding a fixed set of accounts.
///
/// Clones share call counters so a test can keep a handle after passing the
/// directory into `AppState`.
#[derive(Clone, Default)]
pub struct MockDirectory {
    accounts: Arc<HashMap<String, (String, Option<String>)>>,
    failure: Option<DirectoryError>,
    counters: Arc<Counters>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account with a display name.
    pub fn with_account(mut self, identifier: &str, secret: &str, name: &str) -> Self {
        Arc::make_mut(&mut self.accounts).insert(
            identifier.to_string(),
            (secret.to_string(), Some(name.to_string())),
        );
        self
    }

    /// Adds an account whose entry has no display name attribute.
    pub fn with_nameless_account(mut self, identifier: &str, secret: &str) -> Self {
        Arc::make_mut(&mut self.accounts)
            .insert(identifier.to_string(), (secret.to_string(), None));
        self
    }

    /// Makes every connection attempt succeed but every operation fail.
    pub fn failing_with(mut self, error: DirectoryError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn connects(&self) -> usize {
        self.counters.connects.load(Ordering::SeqCst)
    }

    pub fn verifies(&self) -> usize {
        self.counters.verifies.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.counters.lookups.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.counters.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryClient for MockDirectory {
    async fn connect(&self) -> Result<Box<dyn DirectoryConnection>, DirectoryError> {
        self.counters.connects.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(self.clone()))
    }

    fn name_attribute(&self) -> &str {
        "givenName"
    }
}

#[async_trait]
impl DirectoryConnection for MockDirectory {
    async fn verify(&mut self, identifier: &str, secret: &str) -> Result<(), DirectoryError> {
        self.counters.verifies.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        match self.accounts.get(identifier) {
            Some((expected, _)) if expected == secret => Ok(()),
            _ => Err(DirectoryError::InvalidCredentials),
        }
    }

    async fn lookup_attribute(
        &mut self,
        identifier: &str,
        _attribute: &str,
    ) -> Result<Option<String>, DirectoryError> {
        self.counters.lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        Ok(self
            .accounts
            .get(identifier)
            .and_then(|(_, name)| name.clone()))
    }

    async fn close(&mut self) {
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
    }
}
