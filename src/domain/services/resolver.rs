//! Reference resolver
//!
//! Maps a tag's relative reference to an uploaded file by basename.

use crate::domain::entities::{FileRegistry, UploadedFile};

/// Final path segment of a reference (everything after the last `/`)
pub fn basename(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// Look up `ref_path`'s basename in the registry by exact name.
///
/// Callers must not pass absolute URLs or data URIs, see [`is_inlinable_ref`].
pub fn resolve<'a>(ref_path: &str, registry: &'a FileRegistry) -> Option<&'a UploadedFile> {
    let name = basename(ref_path);
    if name.is_empty() {
        return None;
    }
    registry.get(name)
}

/// Whether a reference may be handed to [`resolve`].
///
/// Rejects empty values, data URIs, protocol-relative URLs and anything that
/// parses as an absolute URL (has a scheme).
pub fn is_inlinable_ref(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.starts_with("//") {
        return false;
    }
    if value
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:"))
    {
        return false;
    }
    url::Url::parse(value).is_err()
}
