//! Generation prompt

use crate::domain::services::context::truncate_chars;
use crate::domain::services::{EXIT_HOOK, OVERLAY_ROOT_ID};

/// Upper bound on context characters embedded in the prompt
pub const MAX_PROMPT_CONTEXT_CHARS: usize = 10_000;

/// Build the instruction text sent to the model for a game context
pub fn build_prompt(context: &str) -> String {
    let context = truncate_chars(context, MAX_PROMPT_CONTEXT_CHARS);
    format!(
        r#"You are an expert creative frontend developer.
A web game has the following code context:
"{context}"

Task:
1. Work out the game's theme from the context (for example retro, sci-fi, horror, cozy, puzzle).
2. Build a polished loading screen in HTML, CSS and JS that matches that theme.

Requirements:
- HTML: wrap everything in a single container <div id="{root_id}">.
- CSS: cover the full viewport (position fixed, z-index 9999) and use animations. Do not include <style> tags.
- JS: run a progress animation that starts on its own, and define a global function
  window.{hook}() that plays a fade-out and then removes the container from the DOM.
  Do not include <script> tags.

Reply with a JSON object with these string fields:
- themeDescription: a short description of the detected theme
- html: the markup
- css: the styles
- js: the script
"#,
        root_id = OVERLAY_ROOT_ID,
        hook = EXIT_HOOK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_shared_contract() {
        let prompt = build_prompt("--- index.html ---\n<canvas></canvas>");

        assert!(prompt.contains(r#"<div id="ai-loading-screen">"#));
        assert!(prompt.contains("window.startLoadingExit()"));
        assert!(prompt.contains("<canvas></canvas>"));
        assert!(prompt.contains("themeDescription"));
    }

    #[test]
    fn prompt_caps_context() {
        let context = "y".repeat(MAX_PROMPT_CONTEXT_CHARS + 500);
        let prompt = build_prompt(&context);

        assert!(prompt.contains(&"y".repeat(MAX_PROMPT_CONTEXT_CHARS)));
        assert!(!prompt.contains(&"y".repeat(MAX_PROMPT_CONTEXT_CHARS + 1)));
    }
}
