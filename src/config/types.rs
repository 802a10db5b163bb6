//! Configuration types

use serde::{Deserialize, Serialize};

use crate::domain::services::ContextLimits;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub context: ContextConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote overlay generator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Bounds on the game context sent to the generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextConfig {
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    #[serde(default = "default_max_chars_per_file")]
    pub max_chars_per_file: usize,

    #[serde(default = "default_max_total_chars")]
    pub max_total_chars: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            max_chars_per_file: default_max_chars_per_file(),
            max_total_chars: default_max_total_chars(),
        }
    }
}

impl ContextConfig {
    pub fn limits(&self) -> ContextLimits {
        ContextLimits {
            max_files: self.max_files,
            max_chars_per_file: self.max_chars_per_file,
            max_total_chars: self.max_total_chars,
        }
    }
}

fn default_max_files() -> usize {
    ContextLimits::default().max_files
}

fn default_max_chars_per_file() -> usize {
    ContextLimits::default().max_chars_per_file
}

fn default_max_total_chars() -> usize {
    ContextLimits::default().max_total_chars
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// File name of the bundle, written next to the game directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
        }
    }
}

fn default_file_name() -> String {
    "game-bundle.html".to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, falling back to `Normal`
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Level selected by repeated `-v` flags
    pub fn from_flag_count(count: u8) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::Debug),
        }
    }
}
