//! Image collection store for the Shutterbox photo album
//!
//! Owns the in-memory list of uploaded images: metadata, the binary
//! payloads, and the transient display handles the rendering layer draws
//! from. Everything here is synchronous and process-local; nothing survives
//! a restart.

pub mod collection;
pub mod handle;
pub mod models;

pub use collection::ImageCollection;
pub use handle::{DisplayHandle, HandleRegistry};
pub use models::{ImageRecord, UploadFile, image_files};
