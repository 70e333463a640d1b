//! UI-facing application layer for the Shutterbox photo album
//!
//! Composes the session manager and the image collection into a single
//! state value the rendering layer drives through plain method calls, and
//! owns the ephemeral state that only matters while a view is open: the
//! auth form mode, the active detail and edit views, and the pending delete
//! confirmation.

pub mod auth_flow;
pub mod config;
pub mod selection;
pub mod state;

pub use auth_flow::{AuthFlow, AuthMode};
pub use config::AppConfig;
pub use selection::{PendingDelete, Selection};
pub use state::AlbumApp;
