//! Domain Services
//!
//! Pure logic over the domain entities. Only the content readers touch the
//! disk, and only through `UploadedFile::bytes`.

pub mod auto_hide;
pub mod bundler;
pub mod context;
pub mod preview;
pub mod readers;
pub mod resolver;

pub use auto_hide::{wrapper_script, EXIT_HOOK, MIN_DISPLAY_MS, OVERLAY_ROOT_ID};
pub use bundler::{
    bundle, bundle_with, Bundle, BundleOptions, BundleReport, RefKind, RefOutcome,
    ReferenceRecord,
};
pub use context::{build_context, sample_files, ContextLimits};
pub use preview::render_preview;
pub use readers::{media_type, read_as_data_uri, read_as_text};
pub use resolver::{basename, is_inlinable_ref, resolve};
