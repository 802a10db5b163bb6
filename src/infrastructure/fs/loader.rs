//! Game loader
//!
//! Registers the files of a game directory under their basenames, the same
//! shape a browser folder upload produces. Bytes are read lazily.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::UploadedFile;
use crate::error::{SplashError, SplashResult};

/// Walk `dir` recursively, skipping hidden and ignored files, sorted by path
pub fn load_directory(dir: &Path) -> SplashResult<Vec<UploadedFile>> {
    load_directory_skipping(dir, None)
}

/// Like [`load_directory`], but leaves out the file at `skip` when it lies
/// inside `dir` (e.g. a previous bundle written into the game directory).
pub fn load_directory_skipping(dir: &Path, skip: Option<&Path>) -> SplashResult<Vec<UploadedFile>> {
    if !dir.is_dir() {
        return Err(SplashError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    // a path that does not exist yet cannot be walked over
    let skip = skip.and_then(|path| path.canonicalize().ok());

    let mut paths: Vec<PathBuf> = Vec::new();
    let walker = WalkBuilder::new(dir)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();
    for entry in walker {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if let Some(skip) = &skip {
            if entry.path().canonicalize().is_ok_and(|p| &p == skip) {
                continue;
            }
        }
        paths.push(entry.into_path());
    }

    Ok(load_paths(paths))
}

/// Register an explicit list of files. Paths without a file name are skipped.
pub fn load_paths<I, P>(paths: I) -> Vec<UploadedFile>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .filter(|p| p.as_ref().file_name().is_some())
        .map(|p| UploadedFile::from_path(p.as_ref()))
        .collect()
}
