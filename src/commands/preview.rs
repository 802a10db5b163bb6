//! Preview command handler

use std::path::Path;

use anyhow::{Context, Result};

use splashpack::config::Verbosity;
use splashpack::infrastructure::{atomic_write, JsonFileOverlaySource};
use splashpack::{render_preview, SplashError};

use super::GlobalArgs;
use crate::ui::primitives::icon::Icon;

pub fn cmd_preview(global: &GlobalArgs<'_>, overlay: &Path, output: &Path) -> Result<()> {
    let (_config, ui) = global.setup(None)?;

    let data = JsonFileOverlaySource::new(overlay)
        .load()
        .map_err(SplashError::from)?;
    let document = render_preview(&data);
    atomic_write(output, document.as_bytes())
        .with_context(|| format!("writing preview to {}", output.display()))?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "preview",
            "overlay": overlay.display().to_string(),
            "path": output.display().to_string(),
            "bytes": document.len(),
        }))?;
    } else if ui.verbosity > Verbosity::Quiet {
        println!(
            "{} Preview written to {}",
            Icon::Preview.colored(ui.color, ui.unicode),
            output.display()
        );
    }
    Ok(())
}
