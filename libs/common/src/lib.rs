//! Common library for the Shutterbox photo album
//!
//! This crate provides shared functionality used across the application
//! crates: the local key-value storage abstraction with its in-memory and
//! file-backed implementations, and the storage error types.

pub mod error;
pub mod storage;

pub use error::{StorageError, StorageResult};
pub use storage::{FileStore, FileStoreConfig, KeyValueStore, MemoryStore};
