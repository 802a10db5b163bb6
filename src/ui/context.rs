use splashpack::config::{ColorMode, Config, Verbosity};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let verbosity = Verbosity::from_flag_count(verbose).unwrap_or(config.output.verbosity);

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbosity,
            caps,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Prompts are only shown to a person at a terminal
    pub fn can_prompt(&self) -> bool {
        !self.json && self.caps.stdin_is_tty && self.caps.is_tty && !self.caps.is_ci
    }
}
