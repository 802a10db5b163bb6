//! Overlay preview document
//!
//! Standalone page showing an overlay on a black background, used to review a
//! generated loading screen before bundling it into a game.

use crate::domain::entities::OverlayData;

pub fn render_preview(overlay: &OverlayData) -> String {
    let title = overlay
        .theme_description
        .as_deref()
        .unwrap_or("Loading Screen Preview");

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
      body {{ margin: 0; padding: 0; background: #000; overflow: hidden; font-family: sans-serif; }}
{css}
    </style>
  </head>
  <body>
{html}
    <script>
      try {{
{js}
      }} catch (e) {{
        console.error("Preview script error:", e);
      }}
    </script>
  </body>
</html>
"#,
        title = escape_text(title),
        css = overlay.css,
        html = overlay.html,
        js = overlay.js,
    )
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
