//! In-memory image collection

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handle::{DisplayHandle, HandleRegistry};
use crate::models::{ImageRecord, UploadFile, title_from_name};

/// The in-memory list of uploaded images
///
/// Insertion order is display order. Every operation is total: a missing id
/// is a quiet no-op, never an error, because callers only pass ids they just
/// observed and a stale id merely means someone else removed the record
/// first.
#[derive(Debug, Default)]
pub struct ImageCollection {
    images: Vec<ImageRecord>,
    handles: HandleRegistry,
}

impl ImageCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record per payload, preserving input order
    ///
    /// Each record gets a fresh id and display handle, a title derived from
    /// the file name, and an empty description. Returns the newly added
    /// records.
    pub fn add_images(&mut self, files: Vec<UploadFile>) -> &[ImageRecord] {
        let first_new = self.images.len();

        for file in files {
            let content = Arc::new(file.bytes);
            let handle = self.handles.acquire(Arc::clone(&content));

            self.images.push(ImageRecord {
                id: Uuid::new_v4(),
                handle,
                content,
                content_type: file.content_type,
                title: title_from_name(&file.name),
                description: String::new(),
                created_at: Utc::now(),
            });
        }

        info!("Added {} images", self.images.len() - first_new);
        &self.images[first_new..]
    }

    /// Update an image's title and description in place
    pub fn update_metadata(&mut self, id: Uuid, title: &str, description: &str) {
        let Some(image) = self.images.iter_mut().find(|i| i.id == id) else {
            debug!("Ignoring metadata update for unknown image {}", id);
            return;
        };

        image.title = title.to_string();
        image.description = description.to_string();
    }

    /// Swap an image's content for a new payload
    ///
    /// The old handle is released before the new content is installed. The
    /// title resets to the new file's derived name; description and creation
    /// time stay as they were.
    pub fn replace_content(&mut self, id: Uuid, file: UploadFile) {
        let Some(image) = self.images.iter_mut().find(|i| i.id == id) else {
            debug!("Ignoring content replacement for unknown image {}", id);
            return;
        };

        let content = Arc::new(file.bytes);
        let new_handle = self.handles.acquire(Arc::clone(&content));
        let old_handle = std::mem::replace(&mut image.handle, new_handle);
        self.handles.release(old_handle);

        image.content = content;
        image.content_type = file.content_type;
        image.title = title_from_name(&file.name);

        info!("Replaced content of image {}", id);
    }

    /// Remove an image, releasing its display handle
    pub fn remove(&mut self, id: Uuid) {
        let Some(index) = self.images.iter().position(|i| i.id == id) else {
            debug!("Ignoring remove for unknown image {}", id);
            return;
        };

        let image = self.images.remove(index);
        self.handles.release(image.handle);

        info!("Removed image {}", id);
    }

    /// All images in insertion order
    pub fn list(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Look up a single image
    pub fn get(&self, id: Uuid) -> Option<&ImageRecord> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Bytes behind a display handle, for the rendering layer
    pub fn resolve(&self, handle: &DisplayHandle) -> Option<Arc<Vec<u8>>> {
        self.handles.resolve(handle)
    }

    /// Number of images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Number of live display handles; tracks `len` unless a handle leaked
    pub fn live_handles(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str, bytes: Vec<u8>) -> UploadFile {
        UploadFile::new(name, "image/png", bytes)
    }

    #[test]
    fn test_add_preserves_order_and_derives_titles() {
        let mut images = ImageCollection::new();

        let added = images.add_images(vec![png("sunset.jpg", vec![1]), png("beach.png", vec![2])]);
        assert_eq!(added.len(), 2);

        let listed = images.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "sunset");
        assert_eq!(listed[1].title, "beach");
        assert_eq!(listed[0].description, "");
        assert_eq!(*listed[0].content, vec![1]);
        assert_eq!(images.live_handles(), 2);
    }

    #[test]
    fn test_update_metadata_round_trip() {
        let mut images = ImageCollection::new();
        let id = images.add_images(vec![png("a.png", vec![1])])[0].id;

        images.update_metadata(id, "T", "D");

        let record = images.get(id).unwrap();
        assert_eq!(record.title, "T");
        assert_eq!(record.description, "D");
    }

    #[test]
    fn test_update_metadata_unknown_id_is_noop() {
        let mut images = ImageCollection::new();
        images.add_images(vec![png("a.png", vec![1])]);

        images.update_metadata(Uuid::new_v4(), "T", "D");

        assert_eq!(images.list()[0].title, "a");
    }

    #[test]
    fn test_replace_resets_title_and_keeps_description() {
        let mut images = ImageCollection::new();
        let id = images.add_images(vec![png("old.png", vec![1])])[0].id;
        images.update_metadata(id, "Kept title? No", "Kept description");

        let old_uri = images.get(id).unwrap().handle.uri().to_string();
        let created_at = images.get(id).unwrap().created_at;

        images.replace_content(id, UploadFile::new("new.jpeg", "image/jpeg", vec![9, 9]));

        let record = images.get(id).unwrap();
        assert_eq!(record.title, "new");
        assert_eq!(record.description, "Kept description");
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.content_type, "image/jpeg");
        assert_eq!(*record.content, vec![9, 9]);

        // Old handle is gone, the new one resolves, and nothing leaked
        assert_ne!(record.handle.uri(), old_uri);
        assert_eq!(images.resolve(&record.handle).as_deref(), Some(&vec![9u8, 9]));
        assert_eq!(images.live_handles(), 1);
    }

    #[test]
    fn test_remove_is_idempotent_and_releases_handles() {
        let mut images = ImageCollection::new();
        let ids: Vec<Uuid> = images
            .add_images(vec![png("a.png", vec![1]), png("b.png", vec![2])])
            .iter()
            .map(|r| r.id)
            .collect();

        images.remove(ids[0]);
        assert!(images.get(ids[0]).is_none());
        assert_eq!(images.len(), 1);

        // Removing again is a no-op, not a failure
        images.remove(ids[0]);
        assert_eq!(images.len(), 1);

        images.remove(ids[1]);
        assert!(images.is_empty());
        assert_eq!(images.live_handles(), 0);
    }
}
