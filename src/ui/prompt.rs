//! Interactive entry selection

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use splashpack::domain::ports::EntryChooser;

/// Asks the user to pick the entry document when it cannot be inferred
pub struct TerminalEntryChooser {
    enabled: bool,
}

impl TerminalEntryChooser {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl EntryChooser for TerminalEntryChooser {
    fn choose(&self, candidates: &[&str]) -> Option<String> {
        if !self.enabled || candidates.is_empty() {
            return None;
        }

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("No index.html found. Which file is the game's entry page?")
            .items(candidates)
            .default(0)
            .interact_opt()
            .ok()
            .flatten()?;

        candidates.get(selection).map(|name| name.to_string())
    }
}
