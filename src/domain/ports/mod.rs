//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundle_events;
pub mod entry_chooser;
pub mod overlay_generator;

pub use bundle_events::{BundleEvent, BundleEventSink, NoopEventSink};
pub use entry_chooser::{EntryChooser, NoEntryChooser};
pub use overlay_generator::OverlayGenerator;
