//! File system access

mod loader;
mod writer;

pub use loader::{load_directory, load_directory_skipping, load_paths};
pub use writer::{atomic_write, sha256_hex};
