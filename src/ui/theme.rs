use crossterm::style::Color;

/// Design tokens for the Splashpack CLI.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const ENTRY: &str = "★";

    pub const BUNDLE: &str = "📦";
    pub const GENERATE: &str = "✨";
    pub const PREVIEW: &str = "👁";

    pub const HTML: &str = "🌐";
    pub const CSS: &str = "🎨";
    pub const JS: &str = "📜";
    pub const IMAGE: &str = "🖼";
    pub const FILE: &str = "📄";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const ENTRY: &str = "*";

    pub const BUNDLE: &str = "[BUNDLE]";
    pub const GENERATE: &str = "[GENERATE]";
    pub const PREVIEW: &str = "[PREVIEW]";

    pub const HTML: &str = "[HTML]";
    pub const CSS: &str = "[CSS]";
    pub const JS: &str = "[JS]";
    pub const IMAGE: &str = "[IMG]";
    pub const FILE: &str = "[FILE]";
}
