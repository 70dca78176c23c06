//! Configuration module for envpush
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ENVPUSH_*)
//! 3. Project config (`envpush.toml` next to the env file, or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_for_env_dir, load_with_warnings, with_cli_overrides, with_env_overrides,
    with_overrides_from, CliOverrides, ConfigWarning, CONFIG_FILE_NAME,
};
pub use types::{Config, ProviderConfig, SyncConfig};
