//! Generate command handler

use std::path::Path;

use anyhow::{Context, Result};

use splashpack::application::GenerateUseCase;
use splashpack::config::Verbosity;
use splashpack::infrastructure::{atomic_write, GeminiGenerator};
use splashpack::SplashError;

use super::GlobalArgs;
use crate::ui::primitives::icon::Icon;
use crate::ui::prompt::TerminalEntryChooser;

pub fn cmd_generate(
    global: &GlobalArgs<'_>,
    dir: &Path,
    entry: Option<&str>,
    output: &Path,
) -> Result<()> {
    let (config, ui) = global.setup(Some(dir))?;
    let generator = GeminiGenerator::from_config(&config.generator).map_err(SplashError::from)?;

    if !ui.json && ui.verbosity > Verbosity::Quiet {
        println!(
            "{} Generating loading screen with {}",
            Icon::Generate.colored(ui.color, ui.unicode),
            config.generator.model
        );
    }

    let use_case = GenerateUseCase::new(generator, TerminalEntryChooser::new(ui.can_prompt()));
    let outcome = use_case.execute(dir, entry, &config.context.limits())?;

    let json = outcome.overlay.to_json_pretty().map_err(SplashError::from)?;
    atomic_write(output, json.as_bytes())
        .with_context(|| format!("writing overlay to {}", output.display()))?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "generate",
            "entry": outcome.entry,
            "context_chars": outcome.context.chars().count(),
            "theme": outcome.overlay.theme_description,
            "path": output.display().to_string(),
        }))?;
        return Ok(());
    }

    if ui.verbosity >= Verbosity::Debug {
        println!("--- context ---\n{}", outcome.context);
    }
    if ui.verbosity > Verbosity::Quiet {
        if let Some(theme) = &outcome.overlay.theme_description {
            println!("  {} {}", Icon::Arrow.render(ui.unicode), theme);
        }
        println!(
            "{} Overlay for {} saved to {}",
            Icon::Success.colored(ui.color, ui.unicode),
            outcome.entry,
            output.display()
        );
    }
    Ok(())
}
