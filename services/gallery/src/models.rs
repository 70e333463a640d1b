//! Image models for the gallery

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::handle::DisplayHandle;

/// One file handed over by the upload surface
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name as picked or dropped, extension included
    pub name: String,
    /// MIME type reported for the payload
    pub content_type: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Create a new upload file
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Whether the payload claims to be an image
    ///
    /// This is the content filter callers apply before anything reaches the
    /// collection; the collection itself trusts its inputs.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Keep only the payloads that are actually images
pub fn image_files(files: Vec<UploadFile>) -> Vec<UploadFile> {
    files.into_iter().filter(UploadFile::is_image).collect()
}

/// Default display title for a file name: everything before the first dot
pub(crate) fn title_from_name(name: &str) -> String {
    name.split('.').next().unwrap_or(name).to_string()
}

/// One image in the collection
///
/// The record owns its payload; the handle is valid exactly as long as the
/// record exists with this content, and the collection releases it before
/// the content is replaced or the record dropped.
#[derive(Debug)]
pub struct ImageRecord {
    pub id: Uuid,
    /// Transient reference the rendering layer displays the content through
    pub handle: DisplayHandle,
    /// Binary payload, shared with the handle registry
    pub content: Arc<Vec<u8>>,
    pub content_type: String,
    /// Editable; defaults to the file name without its extension
    pub title: String,
    /// Editable free text, empty by default
    pub description: String,
    /// Set at upload, never touched again
    pub created_at: DateTime<Utc>,
}
