//! Overlay loaded from a JSON file on disk

use std::path::{Path, PathBuf};

use crate::domain::entities::OverlayData;
use crate::domain::ports::OverlayGenerator;
use crate::error::GenerationError;

/// Reads `{themeDescription, html, css, js}` from a file; the context is unused
#[derive(Debug, Clone)]
pub struct JsonFileOverlaySource {
    path: PathBuf,
}

impl JsonFileOverlaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<OverlayData, GenerationError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            GenerationError::OverlayFile {
                path: self.path.clone(),
                source,
            }
        })?;
        OverlayData::from_json(&raw)
    }
}

impl OverlayGenerator for JsonFileOverlaySource {
    fn generate(&self, _context: &str) -> Result<OverlayData, GenerationError> {
        self.load()
    }

    fn describe(&self) -> String {
        format!("overlay file {}", self.path.display())
    }

    fn needs_context(&self) -> bool {
        false
    }
}
