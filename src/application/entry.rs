//! Loading a game and choosing its entry document

use std::path::Path;

use crate::domain::entities::{FileRegistry, UploadedFile};
use crate::domain::ports::EntryChooser;
use crate::error::{SplashError, SplashResult};
use crate::infrastructure::fs::load_directory_skipping;

/// Load every file under `dir` into a registry
pub fn load_registry(dir: &Path) -> SplashResult<FileRegistry> {
    load_registry_skipping(dir, None)
}

/// Load `dir`, leaving out `skip` (the bundle's own output) if it lives there
pub fn load_registry_skipping(dir: &Path, skip: Option<&Path>) -> SplashResult<FileRegistry> {
    Ok(load_directory_skipping(dir, skip)?.into_iter().collect())
}

/// Pick the entry document.
///
/// An explicit name must exist. Otherwise `index.html` (any case), then the
/// only HTML file, then whatever `chooser` picks among the HTML files.
pub fn select_entry<'a>(
    registry: &'a FileRegistry,
    explicit: Option<&str>,
    chooser: &dyn EntryChooser,
) -> SplashResult<&'a UploadedFile> {
    if let Some(name) = explicit {
        return registry.get(name).ok_or_else(|| SplashError::EntryNotFound {
            name: name.to_string(),
        });
    }

    if let Some(candidate) = registry.find_entry_candidate() {
        return Ok(candidate);
    }

    let html: Vec<&UploadedFile> = registry.html_files().collect();
    match html.as_slice() {
        [] => Err(SplashError::NoEntryCandidate),
        [only] => Ok(*only),
        many => {
            let names: Vec<&str> = many.iter().map(|f| f.name.as_str()).collect();
            chooser
                .choose(&names)
                .and_then(|name| registry.get(&name))
                .ok_or(SplashError::NoEntryCandidate)
        }
    }
}
