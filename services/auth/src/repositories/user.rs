//! User repository over the local key-value store

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use common::KeyValueStore;

use crate::models::Credential;

/// Key under which the whole user table is persisted
pub(crate) const USERS_KEY: &str = "photoAlbumUsers";

/// User repository
///
/// Persists the credential table as a single JSON array under one storage
/// key. The table is small and read in full on every lookup, the same access
/// pattern the storage layout was designed for.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn KeyValueStore>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the full credential table, empty if nothing was ever persisted
    pub(crate) fn load(&self) -> Result<Vec<Credential>> {
        match self.store.get(USERS_KEY)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full credential table
    pub(crate) fn save(&self, users: &[Credential]) -> Result<()> {
        let text = serde_json::to_string(users)?;
        self.store.set(USERS_KEY, &text)?;
        Ok(())
    }

    /// Find a credential by email
    ///
    /// Comparison is byte-for-byte, so differently-cased emails belong to
    /// distinct accounts.
    /// TODO: decide whether lookup should normalize case; changing it now
    /// would orphan already-registered mixed-case accounts.
    pub(crate) fn find_by_email(&self, email: &str) -> Result<Option<Credential>> {
        let users = self.load()?;
        Ok(users.into_iter().find(|c| c.email == email))
    }

    /// Append a credential and persist the table
    pub(crate) fn insert(&self, credential: Credential) -> Result<()> {
        info!("Creating new user: {}", credential.email);

        let mut users = self.load()?;
        users.push(credential);
        self.save(&users)
    }
}
