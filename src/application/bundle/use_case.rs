//! Bundle Use Case
//!
//! 1. Load the game directory into a registry, minus any earlier output
//! 2. Choose the entry document
//! 3. Obtain the overlay
//! 4. Bundle
//! 5. Write the output atomically (skipped on dry run)
//!
//! Nothing is written until the bundle is complete, so a failed run leaves any
//! previous output in place.

use crate::domain::entities::{FileRegistry, OverlayData, UploadedFile};
use crate::domain::ports::{BundleEvent, BundleEventSink, EntryChooser, OverlayGenerator};
use crate::domain::services::{
    build_context, bundle_with, BundleReport, RefOutcome, OVERLAY_ROOT_ID,
};
use crate::error::SplashResult;
use crate::infrastructure::fs::{atomic_write, sha256_hex};

use crate::application::entry::{load_registry_skipping, select_entry};
use super::options::BundleRunOptions;
use super::result::BundleOutcome;

/// Bundle use case, parameterized by its overlay source and entry chooser
pub struct BundleUseCase<G, C>
where
    G: OverlayGenerator,
    C: EntryChooser,
{
    generator: G,
    chooser: C,
}

impl<G, C> BundleUseCase<G, C>
where
    G: OverlayGenerator,
    C: EntryChooser,
{
    pub fn new(generator: G, chooser: C) -> Self {
        Self { generator, chooser }
    }

    pub fn execute(
        &self,
        options: &BundleRunOptions,
        sink: &dyn BundleEventSink,
    ) -> SplashResult<BundleOutcome> {
        sink.on_event(BundleEvent::Started {
            source: options.source.clone(),
        });

        let registry = load_registry_skipping(&options.source, Some(&options.output))?;
        sink.on_event(BundleEvent::FilesLoaded {
            count: registry.len(),
        });

        let entry = select_entry(&registry, options.entry.as_deref(), &self.chooser)?;
        sink.on_event(BundleEvent::EntrySelected {
            name: entry.name.clone(),
        });

        let overlay = self.obtain_overlay(&registry, entry, options)?;
        sink.on_event(BundleEvent::OverlayReady {
            source: self.generator.describe(),
            theme: overlay.theme_description.clone(),
        });

        let bundle = bundle_with(&registry, entry, &overlay, &options.bundle)?;
        report_references(&bundle.report, sink);

        let bytes = bundle.html.len();
        let sha256 = sha256_hex(bundle.html.as_bytes());
        if !options.dry_run {
            atomic_write(&options.output, bundle.html.as_bytes())?;
            sink.on_event(BundleEvent::Written {
                path: options.output.clone(),
                bytes,
                sha256: sha256.clone(),
            });
        }

        sink.on_event(BundleEvent::Completed {
            inlined: bundle.report.inlined_count(),
            unresolved: bundle.report.unresolved_count(),
            unreadable: bundle.report.unreadable_count(),
            dry_run: options.dry_run,
        });

        Ok(BundleOutcome {
            entry: entry.name.clone(),
            file_count: registry.len(),
            overlay,
            report: bundle.report,
            output: options.output.clone(),
            bytes,
            sha256,
            written: !options.dry_run,
        })
    }

    fn obtain_overlay(
        &self,
        registry: &FileRegistry,
        entry: &UploadedFile,
        options: &BundleRunOptions,
    ) -> SplashResult<OverlayData> {
        let context = if self.generator.needs_context() {
            build_context(registry, Some(entry), &options.context_limits)
        } else {
            String::new()
        };
        Ok(self.generator.generate(&context)?)
    }
}

fn report_references(report: &BundleReport, sink: &dyn BundleEventSink) {
    if sink.wants_detailed_events() {
        for record in &report.references {
            let kind = record.kind;
            let reference = record.reference.clone();
            sink.on_event(match &record.outcome {
                RefOutcome::Inlined { file } => BundleEvent::ReferenceInlined {
                    kind,
                    reference,
                    file: file.clone(),
                },
                RefOutcome::Unresolved => BundleEvent::ReferenceUnresolved { kind, reference },
                RefOutcome::Unreadable { error } => BundleEvent::ReferenceUnreadable {
                    kind,
                    reference,
                    error: error.clone(),
                },
            });
        }
    }

    if !report.overlay_root_found {
        sink.on_event(BundleEvent::OverlayRootMissing {
            root_id: OVERLAY_ROOT_ID,
        });
    }
}
