//! Ephemeral UI selection state

use uuid::Uuid;

/// Delete confirmation awaiting an answer: the target id plus the title
/// shown in the confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: Uuid,
    pub title: String,
}

/// Which image is open where
///
/// Purely ephemeral: nothing here survives a restart, and every component
/// referencing a removed image is dropped along with the record.
#[derive(Debug, Default)]
pub struct Selection {
    /// Image open in the detail view
    pub viewing: Option<Uuid>,
    /// Image open in the edit view
    pub editing: Option<Uuid>,
    /// Pending delete confirmation
    pub pending_delete: Option<PendingDelete>,
}

impl Selection {
    /// Reset everything
    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    /// Drop any component that references the given image
    pub fn clear_for(&mut self, id: Uuid) {
        if self.viewing == Some(id) {
            self.viewing = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.pending_delete.as_ref().is_some_and(|p| p.id == id) {
            self.pending_delete = None;
        }
    }
}
