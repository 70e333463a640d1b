//! Session manager for the Shutterbox photo album
//!
//! This crate owns the authenticated-user record: it registers and logs in
//! users against a locally persisted credential table, keeps the current
//! session alive across restarts, and hands the rest of the application a
//! password-free view of whoever is signed in.

pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use error::AuthError;
pub use models::User;
pub use session::{AuthConfig, SessionManager};
