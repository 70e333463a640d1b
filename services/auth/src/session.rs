//! Session management over the local key-value store

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use common::KeyValueStore;

use crate::error::AuthError;
use crate::models::{Credential, User};
use crate::repositories::UserRepository;

/// Key under which the current session is persisted
pub(crate) const SESSION_KEY: &str = "photoAlbumCurrentUser";

/// Session manager configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Artificial delay applied to register and login, in milliseconds.
    /// Stands in for the round-trip of a real authentication backend and is
    /// neither cancellable nor retried.
    pub delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl AuthConfig {
    /// Create a new AuthConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SHUTTERBOX_AUTH_DELAY_MS`: simulated backend latency (default: 1000)
    pub fn from_env() -> Result<Self> {
        let delay_ms = std::env::var("SHUTTERBOX_AUTH_DELAY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .unwrap_or(1000);

        Ok(AuthConfig { delay_ms })
    }
}

/// Session manager for the photo album
///
/// Holds zero or one authenticated user. Register and login move the state
/// from anonymous to authenticated, logout moves it back, and a failed
/// attempt leaves it untouched. The session is mirrored to the store so a
/// fresh process picks up where the last one signed in.
///
/// Overlapping register or login calls are not serialized; whichever
/// resolves last owns the session.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    users: UserRepository,
    config: AuthConfig,
    current: Option<User>,
}

impl SessionManager {
    /// Create a session manager, restoring any persisted session
    pub fn new(store: Arc<dyn KeyValueStore>, config: AuthConfig) -> Self {
        let current = match store.get(SESSION_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<User>(&text) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Discarding unreadable persisted session: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read persisted session: {}", e);
                None
            }
        };

        if let Some(user) = &current {
            info!("Restored session for user: {}", user.email);
        }

        let users = UserRepository::new(Arc::clone(&store));

        Self {
            store,
            users,
            config,
            current,
        }
    }

    /// Register a new account and sign it in
    ///
    /// Fails with [`AuthError::DuplicateUser`] if the email already has an
    /// account, leaving the existing record and the session untouched.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AuthError> {
        self.simulate_latency().await;

        if self.users.find_by_email(email)?.is_some() {
            return Err(AuthError::DuplicateUser);
        }

        let credential = Credential {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.users.insert(credential.clone())?;

        let user = credential.user();
        self.set_session(user.clone())?;

        info!("Registered user: {}", user.email);
        Ok(user)
    }

    /// Sign in an existing account
    ///
    /// Fails with [`AuthError::InvalidCredentials`] unless both email and
    /// password match a stored credential exactly.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        self.simulate_latency().await;

        let found = self
            .users
            .load()?
            .into_iter()
            .find(|c| c.email == email && c.password == password);

        let Some(credential) = found else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = credential.user();
        self.set_session(user.clone())?;

        info!("Logged in user: {}", user.email);
        Ok(user)
    }

    /// Sign out; has no failure mode from the caller's perspective
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!("Logged out user: {}", user.email);
        }

        if let Err(e) = self.store.remove(SESSION_KEY) {
            warn!("Failed to clear persisted session: {}", e);
        }
    }

    /// Currently authenticated user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    fn set_session(&mut self, user: User) -> Result<(), AuthError> {
        // Only the projection is persisted; the password never appears
        // under the session key.
        let text = serde_json::to_string(&user).map_err(anyhow::Error::from)?;
        self.store.set(SESSION_KEY, &text)?;
        self.current = Some(user);
        Ok(())
    }

    async fn simulate_latency(&self) {
        if self.config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }
    }
}
