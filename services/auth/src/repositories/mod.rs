//! Repositories for persisted authentication state

pub mod user;

pub use user::UserRepository;
