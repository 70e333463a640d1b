//! Transient display handles for image content
//!
//! A handle is the process-local stand-in for an object URL: the rendering
//! layer keeps the URI, the registry keeps the bytes. Handles are acquired
//! when content enters the collection and must be released exactly once,
//! when that content is replaced or removed.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Owned reference to displayable image bytes
///
/// Not `Clone`: release consumes the handle by value, so releasing twice is
/// unrepresentable.
#[derive(Debug, PartialEq, Eq)]
pub struct DisplayHandle {
    uri: String,
}

impl DisplayHandle {
    /// URI the rendering layer displays the content under
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Registry of live display handles
#[derive(Debug, Default)]
pub struct HandleRegistry {
    entries: HashMap<String, Arc<Vec<u8>>>,
}

impl HandleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh handle for the given bytes
    pub fn acquire(&mut self, bytes: Arc<Vec<u8>>) -> DisplayHandle {
        let uri = format!("mem://{}", Uuid::new_v4());
        self.entries.insert(uri.clone(), bytes);
        DisplayHandle { uri }
    }

    /// Bytes behind a handle, `None` once it has been released
    pub fn resolve(&self, handle: &DisplayHandle) -> Option<Arc<Vec<u8>>> {
        self.entries.get(&handle.uri).cloned()
    }

    /// Release a handle, dropping the registry's hold on the bytes
    pub fn release(&mut self, handle: DisplayHandle) {
        debug!("Releasing display handle {}", handle.uri);
        self.entries.remove(&handle.uri);
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no handles are live
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
