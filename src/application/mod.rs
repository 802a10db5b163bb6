//! Application Layer
//!
//! Use cases orchestrating domain services and infrastructure.
//!
//! - `bundle` - load a game, obtain an overlay, bundle, write the output
//! - `generate` - load a game and produce an overlay only

pub mod bundle;
pub mod entry;
pub mod generate;

pub use bundle::{BundleOutcome, BundleRunOptions, BundleUseCase};
pub use entry::{load_registry, load_registry_skipping, select_entry};
pub use generate::{GenerateOutcome, GenerateUseCase};
