//! Command handlers

mod bundle;
mod files;
mod generate;
mod preview;

use std::path::Path;

use anyhow::{Context, Result};

use splashpack::config::{load_layered, Config};

use crate::cli::{Cli, Commands};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

pub use bundle::cmd_bundle;
pub use files::cmd_files;
pub use generate::cmd_generate;
pub use preview::cmd_preview;

pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        json,
        verbose,
        color,
        config,
        command,
    } = cli;
    let global = GlobalArgs {
        json,
        verbose,
        color,
        config: config.as_deref(),
    };

    match command {
        Commands::Bundle {
            dir,
            entry,
            overlay,
            output,
            dry_run,
        } => cmd_bundle(
            &global,
            &dir,
            entry,
            overlay.as_deref(),
            output,
            dry_run,
        ),
        Commands::Generate { dir, entry, output } => {
            cmd_generate(&global, &dir, entry.as_deref(), &output)
        }
        Commands::Preview { overlay, output } => cmd_preview(&global, &overlay, &output),
        Commands::Files { dir } => cmd_files(&global, &dir),
    }
}

/// Flags shared by every subcommand
pub struct GlobalArgs<'a> {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<crate::cli::ColorWhen>,
    pub config: Option<&'a Path>,
}

impl GlobalArgs<'_> {
    /// Resolve config for `game_dir` and build the UI context, reporting config warnings
    fn setup(&self, game_dir: Option<&Path>) -> Result<(Config, UiContext)> {
        let (config, warnings) =
            load_layered(self.config, game_dir).context("loading configuration")?;
        let ui = UiContext::new(self.json, self.verbose, self.color, &config);
        print_config_warnings(&warnings, &ui);
        Ok((config, ui))
    }
}
