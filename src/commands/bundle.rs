//! Bundle command handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use splashpack::application::{BundleRunOptions, BundleUseCase};
use splashpack::config::Verbosity;
use splashpack::domain::ports::{BundleEventSink, OverlayGenerator};
use splashpack::infrastructure::{GeminiGenerator, JsonEventSink, JsonFileOverlaySource};
use splashpack::SplashError;

use super::GlobalArgs;
use crate::ui::console::ConsoleEventSink;
use crate::ui::primitives::icon::Icon;
use crate::ui::prompt::TerminalEntryChooser;

pub fn cmd_bundle(
    global: &GlobalArgs<'_>,
    dir: &Path,
    entry: Option<String>,
    overlay: Option<&Path>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let (config, ui) = global.setup(Some(dir))?;

    let generator: Box<dyn OverlayGenerator> = match overlay {
        Some(path) => Box::new(JsonFileOverlaySource::new(path)),
        None => Box::new(GeminiGenerator::from_config(&config.generator).map_err(SplashError::from)?),
    };

    let output = output.unwrap_or_else(|| PathBuf::from(&config.output.file_name));
    let options = BundleRunOptions::new(dir, &output)
        .with_entry(entry)
        .with_dry_run(dry_run)
        .with_context_limits(config.context.limits());

    let sink: Box<dyn BundleEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    };

    let use_case = BundleUseCase::new(generator, TerminalEntryChooser::new(ui.can_prompt()));
    let outcome = use_case.execute(&options, sink.as_ref())?;

    if !ui.json && ui.verbosity > Verbosity::Quiet && outcome.written {
        println!(
            "\n{} Open {} in a browser to play",
            Icon::Arrow.render(ui.unicode),
            outcome.output.display()
        );
    }

    Ok(())
}
