use splashpack::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn format_config_warning(w: &ConfigWarning, ui: &UiContext) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    let mut text = format!(
        "{} Unknown config key '{}' in {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        w.key,
        location
    );
    if let Some(suggestion) = &w.suggestion {
        text.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    text
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "code": "unknown_config_key",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        } else {
            eprintln!("{}", format_config_warning(w, ui));
        }
    }
}
