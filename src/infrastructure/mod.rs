//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and all disk/network I/O.
//!
//! ## Structure
//!
//! - `fs/` - Game loading and atomic output writes
//! - `events/` - Event sink implementations
//! - `generator/` - Overlay sources (HTTP model client, JSON file)

pub mod events;
pub mod fs;
pub mod generator;

pub use events::JsonEventSink;
pub use fs::{atomic_write, load_directory, load_directory_skipping, load_paths, sha256_hex};
pub use generator::{build_prompt, GeminiGenerator, JsonFileOverlaySource};
