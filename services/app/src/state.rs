//! Application state tying the session manager to the image collection

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use auth::{AuthConfig, SessionManager, User};
use common::{FileStore, KeyValueStore, MemoryStore};
use gallery::{ImageCollection, UploadFile, image_files};

use crate::auth_flow::{AuthFlow, AuthMode};
use crate::config::AppConfig;
use crate::selection::{PendingDelete, Selection};

/// Application state the rendering layer drives and re-renders from
///
/// Explicitly constructed and passed around; there is no global instance.
/// The session gates the collection: while nobody is signed in the gallery
/// is unreachable and every image operation quietly does nothing.
pub struct AlbumApp {
    session: SessionManager,
    images: ImageCollection,
    selection: Selection,
    auth_flow: AuthFlow,
}

impl AlbumApp {
    /// Build the app over an injected store
    pub fn new(store: Arc<dyn KeyValueStore>, auth_config: AuthConfig) -> Self {
        Self {
            session: SessionManager::new(store, auth_config),
            images: ImageCollection::new(),
            selection: Selection::default(),
            auth_flow: AuthFlow::default(),
        }
    }

    /// Build the app over the file-backed store the config points at
    pub fn open(config: &AppConfig) -> Result<Self> {
        let store = FileStore::open(&config.storage)?;
        Ok(Self::new(Arc::new(store), config.auth.clone()))
    }

    /// Build an app with no durability, for tests and previews
    pub fn in_memory(auth_config: AuthConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new()), auth_config)
    }

    /// Currently authenticated user, restored from storage at startup
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// State of the login/register form
    pub fn auth_flow(&self) -> &AuthFlow {
        &self.auth_flow
    }

    /// Switch the form between login and register
    pub fn toggle_auth_mode(&mut self) {
        self.auth_flow.toggle_mode();
    }

    /// Submit the visible auth form
    ///
    /// A failed attempt records its message for the form and leaves the
    /// session anonymous; any earlier message is cleared before the attempt.
    /// `name` only matters in register mode.
    pub async fn submit_auth(&mut self, email: &str, password: &str, name: Option<&str>) {
        self.auth_flow.clear_error();

        let result = match self.auth_flow.mode() {
            AuthMode::Login => self.session.login(email, password).await,
            AuthMode::Register => {
                self.session
                    .register(email, password, name.unwrap_or_default())
                    .await
            }
        };

        if let Err(e) = result {
            self.auth_flow.set_error(e.to_string());
        }
    }

    /// Sign out
    ///
    /// Uploaded images stay in memory but are unreachable until the next
    /// sign-in; all open views and confirmations are dropped.
    pub fn sign_out(&mut self) {
        self.session.logout();
        self.selection.clear();
    }

    /// The image collection, reachable only while authenticated
    pub fn gallery(&self) -> Option<&ImageCollection> {
        self.session.current_user().map(|_| &self.images)
    }

    fn gallery_mut(&mut self) -> Option<&mut ImageCollection> {
        if self.session.current_user().is_none() {
            debug!("Ignoring gallery access while signed out");
            return None;
        }
        Some(&mut self.images)
    }

    /// Open views and pending confirmations
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Accept dropped or picked files, keeping only image payloads
    pub fn upload(&mut self, files: Vec<UploadFile>) {
        let files = image_files(files);
        if files.is_empty() {
            return;
        }

        let Some(images) = self.gallery_mut() else {
            return;
        };
        images.add_images(files);
    }

    /// Open the detail view on an image
    pub fn view(&mut self, id: Uuid) {
        if self.gallery().and_then(|g| g.get(id)).is_some() {
            self.selection.viewing = Some(id);
        }
    }

    /// Close the detail view
    pub fn close_viewer(&mut self) {
        self.selection.viewing = None;
    }

    /// Open the edit view on an image; the detail view closes alongside
    pub fn edit(&mut self, id: Uuid) {
        if self.gallery().and_then(|g| g.get(id)).is_some() {
            self.selection.editing = Some(id);
            self.selection.viewing = None;
        }
    }

    /// Close the edit view without saving
    pub fn close_editor(&mut self) {
        self.selection.editing = None;
    }

    /// Save edited metadata and close the editor
    pub fn save_edit(&mut self, id: Uuid, title: &str, description: &str) {
        let Some(images) = self.gallery_mut() else {
            return;
        };
        images.update_metadata(id, title, description);
        self.selection.editing = None;
    }

    /// Swap an image's content for a new payload and close the editor
    pub fn replace(&mut self, id: Uuid, file: UploadFile) {
        if !file.is_image() {
            debug!("Ignoring non-image replacement payload: {}", file.name);
            return;
        }

        let Some(images) = self.gallery_mut() else {
            return;
        };
        images.replace_content(id, file);
        self.selection.editing = None;
    }

    /// First step of deletion: remember what to confirm
    pub fn request_delete(&mut self, id: Uuid) {
        let Some(title) = self
            .gallery()
            .and_then(|g| g.get(id))
            .map(|record| record.title.clone())
        else {
            return;
        };

        self.selection.pending_delete = Some(PendingDelete { id, title });
    }

    /// Confirm the pending deletion
    ///
    /// Degrades to a no-op if the image was removed independently while the
    /// confirmation was open.
    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.selection.pending_delete.take() else {
            return;
        };

        if let Some(images) = self.gallery_mut() {
            images.remove(pending.id);
        }
        self.selection.clear_for(pending.id);
    }

    /// Dismiss the pending deletion
    pub fn cancel_delete(&mut self) {
        self.selection.pending_delete = None;
    }
}
