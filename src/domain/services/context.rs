//! Generation context sampler
//!
//! Builds the bounded free-text description of a game that is sent to the
//! overlay generator: the entry document first, then other source files by
//! kind priority, each truncated.

use super::readers::read_as_text;
use crate::domain::entities::{FileKind, FileRegistry, UploadedFile};

/// Bounds for the sampled context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextLimits {
    pub max_files: usize,
    pub max_chars_per_file: usize,
    pub max_total_chars: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self {
            max_files: 3,
            max_chars_per_file: 3000,
            max_total_chars: 10_000,
        }
    }
}

/// Sampling rank of a kind; `None` means never sampled
fn sample_priority(kind: FileKind) -> Option<u8> {
    match kind {
        FileKind::Html => Some(0),
        FileKind::Js => Some(1),
        FileKind::Css => Some(2),
        FileKind::Image | FileKind::Other => None,
    }
}

/// Files that would be sampled, in order
pub fn sample_files<'a>(
    registry: &'a FileRegistry,
    entry: Option<&'a UploadedFile>,
    limits: &ContextLimits,
) -> Vec<&'a UploadedFile> {
    let mut rest: Vec<(u8, usize, &UploadedFile)> = registry
        .iter()
        .enumerate()
        .filter(|(_, f)| entry.map_or(true, |e| e.name != f.name))
        .filter_map(|(i, f)| sample_priority(f.kind).map(|p| (p, i, f)))
        .collect();
    rest.sort_by_key(|(priority, index, _)| (*priority, *index));

    entry
        .into_iter()
        .chain(rest.into_iter().map(|(_, _, f)| f))
        .take(limits.max_files)
        .collect()
}

/// Build the context string. Unreadable files are skipped.
pub fn build_context(
    registry: &FileRegistry,
    entry: Option<&UploadedFile>,
    limits: &ContextLimits,
) -> String {
    let mut context = String::new();
    for file in sample_files(registry, entry, limits) {
        let Ok(text) = read_as_text(file) else { continue };
        context.push_str(&format!("--- {} ---\n", file.name));
        context.push_str(truncate_chars(&text, limits.max_chars_per_file));
        context.push('\n');
    }
    truncate_chars(&context, limits.max_total_chars).to_string()
}

/// Longest prefix of `s` with at most `max` characters
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
