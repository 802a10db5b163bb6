//! Bundle Options

use std::path::PathBuf;

use crate::domain::services::{BundleOptions, ContextLimits};

/// Options for the bundle use case
#[derive(Debug, Clone)]
pub struct BundleRunOptions {
    /// Game directory
    pub source: PathBuf,
    /// Explicit entry file name
    pub entry: Option<String>,
    /// Where the bundle is written
    pub output: PathBuf,
    /// Dry run (bundle but don't write)
    pub dry_run: bool,
    /// Bounds for the context handed to the overlay generator
    pub context_limits: ContextLimits,
    pub bundle: BundleOptions,
}

impl BundleRunOptions {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            entry: None,
            output: output.into(),
            dry_run: false,
            context_limits: ContextLimits::default(),
            bundle: BundleOptions::default(),
        }
    }

    pub fn with_entry(mut self, entry: Option<String>) -> Self {
        self.entry = entry;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_context_limits(mut self, limits: ContextLimits) -> Self {
        self.context_limits = limits;
        self
    }
}
