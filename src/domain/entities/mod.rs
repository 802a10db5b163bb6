//! Domain Entities
//!
//! Core entities that flow through a bundling session.

pub mod file_registry;
pub mod overlay;
pub mod uploaded_file;

pub use file_registry::FileRegistry;
pub use overlay::OverlayData;
pub use uploaded_file::{FileKind, FileSource, UploadedFile};
