//! Overlay auto-hide contract
//!
//! The overlay's own script may define `window.startLoadingExit()`. The wrapper
//! generated here runs that script, then once the host page has loaded and the
//! minimum display time has passed it calls the hook, or hides the element
//! with id `ai-loading-screen` when the hook is absent.
//!
//! The id and hook name are also written into the generation prompt
//! (see `infrastructure::generator::prompt`), so both sides agree on them.

/// Element id the overlay markup wraps itself in
pub const OVERLAY_ROOT_ID: &str = "ai-loading-screen";

/// Global zero-argument function the overlay may expose to animate itself out
pub const EXIT_HOOK: &str = "startLoadingExit";

/// Minimum time the overlay stays visible, measured from wrapper execution
pub const MIN_DISPLAY_MS: u64 = 2500;

/// Wrap the overlay's script with the timing logic.
///
/// The overlay script is embedded verbatim inside a `try` block so that an
/// exception in generated code cannot prevent the overlay from being hidden.
pub fn wrapper_script(overlay_js: &str, min_display_ms: u64) -> String {
    format!(
        r#"
(function() {{
  var startTime = Date.now();
  try {{
{overlay_js}
  }} catch (e) {{
    console.error('Loading screen script error:', e);
  }}

  var MIN_DISPLAY_MS = {min_display_ms};

  function hideLoadingScreen() {{
    if (typeof window.{hook} === 'function') {{
      window.{hook}();
    }} else {{
      var root = document.getElementById('{root_id}');
      if (root) root.style.display = 'none';
    }}
  }}

  function scheduleExit() {{
    var elapsed = Date.now() - startTime;
    var remaining = Math.max(0, MIN_DISPLAY_MS - elapsed);
    setTimeout(hideLoadingScreen, remaining);
  }}

  if (document.readyState === 'complete') {{
    scheduleExit();
  }} else {{
    window.addEventListener('load', scheduleExit);
  }}
}})();
"#,
        hook = EXIT_HOOK,
        root_id = OVERLAY_ROOT_ID,
    )
}
