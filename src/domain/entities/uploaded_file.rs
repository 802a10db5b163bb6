//! Uploaded file entity
//!
//! One file of a game upload: its basename, where its bytes live, and its kind.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ReadError;

/// Kind of uploaded file, detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Html,
    Css,
    Js,
    Image,
    Other,
}

impl FileKind {
    /// Detect the kind from a file name (extension compared case-insensitively)
    pub fn from_name(name: &str) -> Self {
        match extension(name).as_deref() {
            Some("html") => FileKind::Html,
            Some("css") => FileKind::Css,
            Some("js") => FileKind::Js,
            Some("png" | "jpg" | "jpeg" | "gif" | "svg" | "webp") => FileKind::Image,
            _ => FileKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Html => "html",
            FileKind::Css => "css",
            FileKind::Js => "js",
            FileKind::Image => "image",
            FileKind::Other => "other",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased extension after the last `.`, if any
pub(crate) fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Where an uploaded file's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Bytes already held in memory
    Memory(Arc<[u8]>),
    /// Bytes read from disk on demand
    Path(PathBuf),
}

/// A file selected for bundling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Basename, unique within a registry
    pub name: String,
    pub source: FileSource,
    pub kind: FileKind,
}

impl UploadedFile {
    /// Create a file backed by in-memory bytes
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let kind = FileKind::from_name(&name);
        Self {
            name,
            source: FileSource::Memory(Arc::from(bytes.into())),
            kind,
        }
    }

    /// Create a file read lazily from `path`, registered under its basename
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let kind = FileKind::from_name(&name);
        Self {
            name,
            source: FileSource::Path(path),
            kind,
        }
    }

    /// Disk location, if the file is backed by one
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(p) => Some(p),
            FileSource::Memory(_) => None,
        }
    }

    /// Raw bytes of the file
    pub fn bytes(&self) -> Result<Cow<'_, [u8]>, ReadError> {
        match &self.source {
            FileSource::Memory(bytes) => Ok(Cow::Borrowed(&bytes[..])),
            FileSource::Path(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| ReadError::new(&self.name, e)),
        }
    }
}
