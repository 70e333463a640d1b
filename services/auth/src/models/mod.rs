//! Data models for the authentication crate

pub mod user;

pub use user::User;
pub(crate) use user::Credential;
