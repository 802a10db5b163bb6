//! Files command handler

use std::path::Path;

use anyhow::Result;

use splashpack::application::load_registry;
use splashpack::UploadedFile;

use super::GlobalArgs;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_files(global: &GlobalArgs<'_>, dir: &Path) -> Result<()> {
    let (_config, ui) = global.setup(Some(dir))?;

    let registry = load_registry(dir)?;
    let entry = registry.find_entry_candidate().map(|f| f.name.as_str());

    if ui.json {
        for file in registry.iter() {
            crate::ui::json::emit(serde_json::json!({
                "event": "file",
                "command": "files",
                "name": file.name,
                "kind": file.kind.as_str(),
                "path": file.path().map(|p| p.display().to_string()),
                "entry": entry == Some(file.name.as_str()),
            }))?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "files",
            "count": registry.len(),
            "html": registry.html_files().count(),
            "entry": entry,
        }))?;
        return Ok(());
    }

    for file in registry.iter() {
        println!("{}", render_file_line(file, entry == Some(file.name.as_str()), &ui));
    }
    println!(
        "\n{} files, {} HTML, entry: {}",
        registry.len(),
        registry.html_files().count(),
        entry.unwrap_or("none (pass --entry)")
    );
    Ok(())
}

fn render_file_line(file: &UploadedFile, is_entry: bool, ui: &UiContext) -> String {
    let mut line = format!(
        "{} {}",
        Icon::Kind(file.kind).colored(ui.color, ui.unicode),
        file.name
    );
    if is_entry {
        line.push_str(&format!(" {}", Icon::Entry.colored(ui.color, ui.unicode)));
    }
    line
}
