//! Bundle Event Port
//!
//! Observable interface for bundle runs. Used for console progress, NDJSON
//! event streams and tests.

use std::path::PathBuf;

use crate::domain::services::RefKind;

/// Event emitted during a bundle run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleEvent {
    /// Bundle started
    Started { source: PathBuf },

    /// Game files registered
    FilesLoaded { count: usize },

    /// Entry document chosen
    EntrySelected { name: String },

    /// Overlay obtained
    OverlayReady {
        source: String,
        theme: Option<String>,
    },

    /// Reference replaced by file content
    ReferenceInlined {
        kind: RefKind,
        reference: String,
        file: String,
    },

    /// No uploaded file matches the reference
    ReferenceUnresolved { kind: RefKind, reference: String },

    /// File matched but could not be read
    ReferenceUnreadable {
        kind: RefKind,
        reference: String,
        error: String,
    },

    /// Overlay markup has no element with the root id
    OverlayRootMissing { root_id: &'static str },

    /// Output written
    Written {
        path: PathBuf,
        bytes: usize,
        sha256: String,
    },

    /// Bundle completed
    Completed {
        inlined: usize,
        unresolved: usize,
        unreadable: usize,
        dry_run: bool,
    },
}

impl BundleEvent {
    /// Per-reference events, filtered out for summary-only sinks
    pub fn is_detailed(&self) -> bool {
        matches!(
            self,
            BundleEvent::ReferenceInlined { .. }
                | BundleEvent::ReferenceUnresolved { .. }
                | BundleEvent::ReferenceUnreadable { .. }
        )
    }
}

/// Trait for receiving bundle events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines in the terminal
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait BundleEventSink: Send + Sync {
    fn on_event(&self, event: BundleEvent);

    /// Whether this sink wants per-reference events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BundleEventSink for NoopEventSink {
    fn on_event(&self, _event: BundleEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
