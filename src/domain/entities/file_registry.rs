//! File registry entity
//!
//! In-memory set of uploaded files for one bundling session, keyed by name and
//! kept in encounter order.

use std::collections::HashMap;

use super::uploaded_file::{FileKind, UploadedFile};

const ENTRY_CANDIDATE: &str = "index.html";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileRegistry {
    files: Vec<UploadedFile>,
    /// name -> position in `files`
    index: HashMap<String, usize>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch, skipping names already present (first write wins).
    ///
    /// Returns how many files were actually added.
    pub fn add<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let before = self.files.len();
        for file in files {
            if !self.index.contains_key(&file.name) {
                self.index.insert(file.name.clone(), self.files.len());
                self.files.push(file);
            }
        }
        self.files.len() - before
    }

    /// Remove the file with exactly this name. Returns whether one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(position) = self.index.remove(name) else {
            return false;
        };
        self.files.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        true
    }

    /// First file named `index.html` (case-insensitive), in encounter order
    pub fn find_entry_candidate(&self) -> Option<&UploadedFile> {
        self.files
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(ENTRY_CANDIDATE))
    }

    pub fn get(&self, name: &str) -> Option<&UploadedFile> {
        self.index.get(name).map(|&position| &self.files[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn html_files(&self) -> impl Iterator<Item = &UploadedFile> {
        self.files.iter().filter(|f| f.kind == FileKind::Html)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedFile> {
        self.files.iter()
    }

    pub fn all(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<UploadedFile> for FileRegistry {
    fn from_iter<T: IntoIterator<Item = UploadedFile>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.add(iter);
        registry
    }
}
