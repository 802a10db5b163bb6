//! Generate Use Case
//!
//! Load a game, choose its entry and ask the overlay generator for an overlay,
//! without bundling. The CLI saves the result as overlay JSON for review or a
//! later `bundle --overlay` run.

use std::path::Path;

use crate::domain::entities::OverlayData;
use crate::domain::ports::{EntryChooser, OverlayGenerator};
use crate::domain::services::{build_context, ContextLimits};
use crate::error::SplashResult;

use super::entry::{load_registry, select_entry};

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub entry: String,
    /// Context that was sent to the generator
    pub context: String,
    pub overlay: OverlayData,
}

pub struct GenerateUseCase<G, C>
where
    G: OverlayGenerator,
    C: EntryChooser,
{
    generator: G,
    chooser: C,
}

impl<G, C> GenerateUseCase<G, C>
where
    G: OverlayGenerator,
    C: EntryChooser,
{
    pub fn new(generator: G, chooser: C) -> Self {
        Self { generator, chooser }
    }

    pub fn execute(
        &self,
        source: &Path,
        entry: Option<&str>,
        limits: &ContextLimits,
    ) -> SplashResult<GenerateOutcome> {
        let registry = load_registry(source)?;
        let entry = select_entry(&registry, entry, &self.chooser)?;
        let context = build_context(&registry, Some(entry), limits);
        let overlay = self.generator.generate(&context)?;

        Ok(GenerateOutcome {
            entry: entry.name.clone(),
            context,
            overlay,
        })
    }
}
