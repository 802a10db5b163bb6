//! Configuration module for Splashpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SPLASHPACK_*)
//! 3. `--config` file, or `<game dir>/splashpack.toml`
//! 4. User config (~/.config/splashpack/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! The first config file found is used; files are not merged.

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_layered, load_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, ContextConfig, GeneratorConfig, OutputConfig, Verbosity};
