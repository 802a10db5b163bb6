//! Splashpack - single-file web game bundler
//!
//! Splashpack takes the files of a browser game (an entry HTML document plus
//! its stylesheets, scripts and images), inlines every local reference into
//! one self-contained HTML file, and injects a themed loading-screen overlay
//! that hides itself once the game has loaded.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{FileKind, FileRegistry, OverlayData, UploadedFile};
pub use domain::services::{bundle, bundle_with, render_preview, Bundle, BundleReport};
pub use error::{GenerationError, ReadError, SplashError, SplashResult};
