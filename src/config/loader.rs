//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SplashError, SplashResult};

use super::types::{Config, Verbosity};

/// Per-game config file looked up in the game directory
pub const PROJECT_CONFIG_FILE: &str = "splashpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SplashResult<Self> {
        let (config, _warnings) = load_with_warnings(path)?;
        Ok(config)
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SplashResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SplashError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config for a run.
///
/// Uses `explicit` if given, else `<game_dir>/splashpack.toml`, else the user
/// config, else defaults. Env overrides are applied on top. A config file that
/// exists but does not parse is an error.
pub fn load_layered(
    explicit: Option<&Path>,
    game_dir: Option<&Path>,
) -> SplashResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => game_dir
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .filter(|path| path.is_file())
            .or_else(|| user_config_path().filter(|path| path.is_file())),
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// `~/.config/splashpack/config.toml`, honoring `XDG_CONFIG_HOME`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("splashpack").join("config.toml"))
}

/// Apply environment variable overrides (SPLASHPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(model) = var("SPLASHPACK_MODEL").filter(|v| !v.is_empty()) {
        config.generator.model = model;
    }

    if let Some(endpoint) = var("SPLASHPACK_ENDPOINT").filter(|v| !v.is_empty()) {
        config.generator.endpoint = endpoint;
    }

    if let Some(verbosity) = var("SPLASHPACK_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lenient(&verbosity);
    }

    if let Some(file_name) = var("SPLASHPACK_OUTPUT").filter(|v| !v.is_empty()) {
        config.output.file_name = file_name;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generator",
        "model",
        "endpoint",
        "api_key_env",
        "timeout_secs",
        "context",
        "max_files",
        "max_chars_per_file",
        "max_total_chars",
        "output",
        "file_name",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
