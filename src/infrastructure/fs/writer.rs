//! Atomic output writer

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::SplashResult;

/// Write content to a file atomically.
///
/// The content goes to a temp file in the target directory which is then
/// renamed over `path`, so a failed run never leaves a partial file behind.
pub fn atomic_write(path: &Path, content: &[u8]) -> SplashResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Hex SHA-256 of the content
pub fn sha256_hex(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bundle.html");

        atomic_write(&path, b"<html></html>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn atomic_write_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bundle.html");

        fs::write(&path, "Original").unwrap();
        atomic_write(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn atomic_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dist/out/bundle.html");

        atomic_write(&path, b"x").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn atomic_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        atomic_write(&dir.path().join("a.html"), b"x").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn sha256_of_known_input() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
