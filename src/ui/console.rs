//! Console Event Sink
//!
//! Human-readable progress lines for a bundle run.

use std::io::{self, Write};
use std::sync::Mutex;

use splashpack::config::Verbosity;
use splashpack::domain::ports::{BundleEvent, BundleEventSink};

use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub struct ConsoleEventSink {
    ui: UiContext,
    annotate: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout()).with_annotations(ui.caps.is_ci && is_github_actions())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            annotate: false,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Also emit GitHub Actions warning annotations
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }
}

fn warning_message(event: &BundleEvent) -> Option<String> {
    match event {
        BundleEvent::ReferenceUnresolved { kind, reference } => Some(format!(
            "{} '{}' not found among game files, left as is",
            kind.as_str(),
            reference
        )),
        BundleEvent::ReferenceUnreadable {
            kind,
            reference,
            error,
        } => Some(format!(
            "{} '{}' could not be read ({}), left as is",
            kind.as_str(),
            reference,
            error
        )),
        BundleEvent::OverlayRootMissing { root_id } => Some(format!(
            "overlay markup has no element with id '{}'; it will not auto-hide without an exit hook",
            root_id
        )),
        _ => None,
    }
}

/// Render one event as a console line, or `None` if it is hidden at this verbosity
pub fn format_event(event: &BundleEvent, ui: &UiContext) -> Option<String> {
    let (color, unicode) = (ui.color, ui.unicode);

    if let Some(message) = warning_message(event) {
        return Some(format!(
            "{} {}",
            Icon::Warning.colored(color, unicode),
            message
        ));
    }

    if ui.verbosity == Verbosity::Quiet {
        return None;
    }

    match event {
        BundleEvent::Started { source } => Some(format!(
            "{} Bundling {}",
            Icon::Bundle.colored(color, unicode),
            source.display()
        )),
        BundleEvent::FilesLoaded { count } => Some(format!(
            "  {} {} files",
            Icon::Arrow.render(unicode),
            count
        )),
        BundleEvent::EntrySelected { name } => Some(format!(
            "  {} entry: {}",
            Icon::Entry.colored(color, unicode),
            name
        )),
        BundleEvent::OverlayReady { source, theme } => Some(match theme {
            Some(theme) => format!(
                "{} Overlay from {}: {}",
                Icon::Generate.colored(color, unicode),
                source,
                theme
            ),
            None => format!(
                "{} Overlay from {}",
                Icon::Generate.colored(color, unicode),
                source
            ),
        }),
        BundleEvent::ReferenceInlined {
            kind,
            reference,
            file,
        } if ui.verbosity >= Verbosity::Verbose => Some(format!(
            "  {} inlined {} {} ({})",
            Icon::Success.colored(color, unicode),
            kind.as_str(),
            reference,
            file
        )),
        BundleEvent::ReferenceInlined { .. } => None,
        BundleEvent::Written {
            path,
            bytes,
            sha256,
        } => Some(if ui.verbosity >= Verbosity::Debug {
            format!(
                "  {} wrote {} ({} bytes, sha256 {})",
                Icon::Arrow.render(unicode),
                path.display(),
                bytes,
                sha256
            )
        } else {
            format!(
                "  {} wrote {} ({} bytes)",
                Icon::Arrow.render(unicode),
                path.display(),
                bytes
            )
        }),
        BundleEvent::Completed {
            inlined,
            unresolved,
            unreadable,
            dry_run,
        } => {
            let skipped = unresolved + unreadable;
            let icon = if skipped == 0 {
                Icon::Success
            } else {
                Icon::Warning
            };
            let mut line = format!(
                "{} Bundle complete: {} inlined, {} left as is",
                icon.colored(color, unicode),
                inlined,
                skipped
            );
            if *dry_run {
                line.push_str(" (dry run, nothing written)");
            }
            Some(line)
        }
        BundleEvent::ReferenceUnresolved { .. }
        | BundleEvent::ReferenceUnreadable { .. }
        | BundleEvent::OverlayRootMissing { .. } => None,
    }
}

impl BundleEventSink for ConsoleEventSink {
    fn on_event(&self, event: BundleEvent) {
        let annotation = if self.annotate {
            warning_message(&event).map(|message| {
                github_actions_annotation(AnnotationLevel::Warning, &message, None, Some("Splashpack"))
            })
        } else {
            None
        };
        let Some(line) = format_event(&event, &self.ui) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Some(annotation) = annotation {
                let _ = writeln!(writer, "{}", annotation);
            }
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
