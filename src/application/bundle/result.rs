//! Bundle Result

use std::path::PathBuf;

use crate::domain::entities::OverlayData;
use crate::domain::services::BundleReport;

/// Result of a bundle run
#[derive(Debug, Clone)]
pub struct BundleOutcome {
    /// Name of the entry document used
    pub entry: String,
    /// Number of files registered from the game directory
    pub file_count: usize,
    pub overlay: OverlayData,
    pub report: BundleReport,
    pub output: PathBuf,
    /// Serialized bundle size in bytes
    pub bytes: usize,
    /// Hex SHA-256 of the bundle
    pub sha256: String,
    /// False for dry runs
    pub written: bool,
}

impl BundleOutcome {
    /// Every resolvable reference was inlined
    pub fn is_complete(&self) -> bool {
        self.report.unresolved_count() == 0 && self.report.unreadable_count() == 0
    }
}
