//! Entry Chooser Port
//!
//! Asked to pick the entry document when neither an explicit name nor the
//! `index.html` heuristic settles it.

pub trait EntryChooser {
    /// Pick one of `candidates` (HTML file names), or `None` to give up
    fn choose(&self, candidates: &[&str]) -> Option<String>;
}

/// Never chooses; used for non-interactive runs
pub struct NoEntryChooser;

impl EntryChooser for NoEntryChooser {
    fn choose(&self, _candidates: &[&str]) -> Option<String> {
        None
    }
}
