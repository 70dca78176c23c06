//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::TargetEnvironment;
use crate::error::{ConfigurationError, EnvPushResult};

use super::types::Config;

/// Config file looked up next to the env file
pub const CONFIG_FILE_NAME: &str = "envpush.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown config key '{}' in {}",
            self.key,
            self.file.display()
        )
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EnvPushResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigurationError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.sync.targets.is_empty() {
        return Err(ConfigurationError::NoTargets {
            path: path.to_path_buf(),
        }
        .into());
    }
    config.sync.targets = dedup_preserving_order(config.sync.targets);

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file for a run
///
/// An explicit path must exist; the implicit `envpush.toml` in `env_dir`
/// is optional and falls back to defaults.
pub fn load_for_env_dir(
    env_dir: &Path,
    explicit: Option<&Path>,
) -> EnvPushResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigurationError::MissingConfigFile {
                path: path.to_path_buf(),
            }
            .into());
        }
        return load_with_warnings(path);
    }

    let implicit = env_dir.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        load_with_warnings(&implicit)
    } else {
        Ok((Config::default(), Vec::new()))
    }
}

/// Overrides given on the command line (highest priority)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub targets: Option<Vec<TargetEnvironment>>,
    pub skip: Vec<String>,
    pub bin: Option<PathBuf>,
}

/// Apply environment variable overrides (ENVPUSH_* prefix)
pub fn with_env_overrides(config: Config) -> EnvPushResult<Config> {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply ENVPUSH_* overrides read through `lookup`
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> EnvPushResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ENVPUSH_TARGETS (comma-separated, replaces)
    if let Some(targets) = lookup("ENVPUSH_TARGETS") {
        let parsed = parse_target_list(&targets)?;
        if !parsed.is_empty() {
            config.sync.targets = parsed;
        }
    }

    // ENVPUSH_SKIP (comma-separated, extends)
    if let Some(skip) = lookup("ENVPUSH_SKIP") {
        config.sync.skip.extend(skip.split(','));
    }

    // ENVPUSH_BIN
    if let Some(bin) = lookup("ENVPUSH_BIN") {
        if !bin.trim().is_empty() {
            config.provider.bin = PathBuf::from(bin.trim());
        }
    }

    Ok(config)
}

/// Apply command-line overrides
pub fn with_cli_overrides(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(targets) = overrides.targets {
        if !targets.is_empty() {
            config.sync.targets = dedup_preserving_order(targets);
        }
    }
    config.sync.skip.extend(overrides.skip);
    if let Some(bin) = overrides.bin {
        config.provider.bin = bin;
    }
    config
}

fn parse_target_list(raw: &str) -> Result<Vec<TargetEnvironment>, ConfigurationError> {
    let targets = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<TargetEnvironment>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(dedup_preserving_order(targets))
}

fn dedup_preserving_order(targets: Vec<TargetEnvironment>) -> Vec<TargetEnvironment> {
    let mut seen = Vec::with_capacity(targets.len());
    for target in targets {
        if !seen.contains(&target) {
            seen.push(target);
        }
    }
    seen
}
