//! Domain Layer
//!
//! Bundling logic over in-memory file descriptors.
//!
//! ## Structure
//!
//! - `entities/` - UploadedFile, FileRegistry, OverlayData
//! - `services/` - Bundler, resolver, readers, auto-hide wrapper, context sampler
//! - `ports/` - Event sink and overlay generator traits
//!
//! Reading a file's bytes is the only I/O here, and it happens through
//! `UploadedFile::bytes`.

pub mod entities;
pub mod ports;
pub mod services;
