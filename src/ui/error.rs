use splashpack::{GenerationError, SplashError};

use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.render(supports_unicode),
            cause
        ));
    }

    if let Some(hint) = err.downcast_ref::<SplashError>().and_then(hint_for) {
        out.push_str(&format!("\n  Hint: {}\n", hint));
    }

    out
}

fn hint_for(err: &SplashError) -> Option<String> {
    match err {
        SplashError::Generation(GenerationError::MissingApiKey { env_var }) => Some(format!(
            "export {}=<key>, or save an overlay once with `splashpack generate` and reuse it",
            env_var
        )),
        SplashError::NoEntryCandidate => {
            Some("pass --entry <NAME> to choose the entry document".to_string())
        }
        SplashError::EntryNotFound { .. } => {
            Some("run `splashpack files <DIR>` to list the registered files".to_string())
        }
        SplashError::InvalidConfig { file, .. } => {
            Some(format!("fix or remove {}", file.display()))
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    if is_github_actions() {
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                None,
                Some("Splashpack"),
            )
        );
    }

    eprint!("{}", format_error(err));
}
