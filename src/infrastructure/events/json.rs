//! JSON Event Sink
//!
//! Outputs bundle events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BundleEvent, BundleEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

pub(crate) fn event_to_json(event: BundleEvent) -> serde_json::Value {
    match event {
        BundleEvent::Started { source } => serde_json::json!({
            "event": "start",
            "command": "bundle",
            "source": source.display().to_string(),
        }),

        BundleEvent::FilesLoaded { count } => serde_json::json!({
            "event": "files_loaded",
            "command": "bundle",
            "count": count,
        }),

        BundleEvent::EntrySelected { name } => serde_json::json!({
            "event": "entry_selected",
            "command": "bundle",
            "entry": name,
        }),

        BundleEvent::OverlayReady { source, theme } => serde_json::json!({
            "event": "overlay_ready",
            "command": "bundle",
            "source": source,
            "theme": theme,
        }),

        BundleEvent::ReferenceInlined {
            kind,
            reference,
            file,
        } => serde_json::json!({
            "event": "reference",
            "command": "bundle",
            "status": "inlined",
            "kind": kind.as_str(),
            "reference": reference,
            "file": file,
        }),

        BundleEvent::ReferenceUnresolved { kind, reference } => serde_json::json!({
            "event": "reference",
            "command": "bundle",
            "status": "unresolved",
            "kind": kind.as_str(),
            "reference": reference,
        }),

        BundleEvent::ReferenceUnreadable {
            kind,
            reference,
            error,
        } => serde_json::json!({
            "event": "reference",
            "command": "bundle",
            "status": "unreadable",
            "kind": kind.as_str(),
            "reference": reference,
            "error": error,
        }),

        BundleEvent::OverlayRootMissing { root_id } => serde_json::json!({
            "event": "warning",
            "command": "bundle",
            "code": "overlay_root_missing",
            "root_id": root_id,
        }),

        BundleEvent::Written {
            path,
            bytes,
            sha256,
        } => serde_json::json!({
            "event": "written",
            "command": "bundle",
            "path": path.display().to_string(),
            "bytes": bytes,
            "sha256": sha256,
        }),

        BundleEvent::Completed {
            inlined,
            unresolved,
            unreadable,
            dry_run,
        } => {
            let status = if unresolved + unreadable == 0 {
                "success"
            } else {
                "partial"
            };
            serde_json::json!({
                "event": "complete",
                "command": "bundle",
                "status": status,
                "inlined": inlined,
                "unresolved": unresolved,
                "unreadable": unreadable,
                "dry_run": dry_run,
            })
        }
    }
}

impl BundleEventSink for JsonEventSink {
    fn on_event(&self, event: BundleEvent) {
        self.write_event(event_to_json(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::RefKind;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn lines(&self) -> Vec<serde_json::Value> {
            let raw = String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap();
            raw.lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let writer = TestWriter::default();
        let sink = JsonEventSink::with_writer(writer.clone());

        sink.on_event(BundleEvent::Started {
            source: PathBuf::from("game"),
        });
        sink.on_event(BundleEvent::FilesLoaded { count: 4 });

        let lines = writer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "start");
        assert_eq!(lines[0]["source"], "game");
        assert_eq!(lines[1]["count"], 4);
    }

    #[test]
    fn json_sink_reference_events_carry_status() {
        let writer = TestWriter::default();
        let sink = JsonEventSink::with_writer(writer.clone());

        sink.on_event(BundleEvent::ReferenceUnresolved {
            kind: RefKind::Script,
            reference: "missing.js".into(),
        });

        let lines = writer.lines();
        assert_eq!(lines[0]["event"], "reference");
        assert_eq!(lines[0]["status"], "unresolved");
        assert_eq!(lines[0]["kind"], "script");
        assert_eq!(lines[0]["reference"], "missing.js");
    }

    #[test]
    fn json_sink_complete_status() {
        let writer = TestWriter::default();
        let sink = JsonEventSink::with_writer(writer.clone());

        sink.on_event(BundleEvent::Completed {
            inlined: 3,
            unresolved: 0,
            unreadable: 0,
            dry_run: false,
        });
        sink.on_event(BundleEvent::Completed {
            inlined: 3,
            unresolved: 1,
            unreadable: 0,
            dry_run: true,
        });

        let lines = writer.lines();
        assert_eq!(lines[0]["status"], "success");
        assert_eq!(lines[1]["status"], "partial");
        assert_eq!(lines[1]["dry_run"], true);
    }

    #[test]
    fn json_sink_root_missing_is_warning() {
        let value = event_to_json(BundleEvent::OverlayRootMissing {
            root_id: "ai-loading-screen",
        });
        assert_eq!(value["event"], "warning");
        assert_eq!(value["root_id"], "ai-loading-screen");
    }
}
