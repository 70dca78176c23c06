//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SkipSet, TargetEnvironment};
use crate::error::EnvPushResult;

use super::loader::{self, ConfigWarning};

/// What gets pushed where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Target environments, in push order
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetEnvironment>,

    /// Keys never pushed
    #[serde(default)]
    pub skip: SkipSet,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            skip: SkipSet::default(),
        }
    }
}

fn default_targets() -> Vec<TargetEnvironment> {
    vec![TargetEnvironment::Preview]
}

/// Provider CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Executable name or path
    #[serde(default = "default_bin")]
    pub bin: PathBuf,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { bin: default_bin() }
    }
}

fn default_bin() -> PathBuf {
    PathBuf::from("vercel")
}

/// Main configuration structure (`envpush.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EnvPushResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect warnings for unknown keys
    pub fn load_with_warnings(path: &Path) -> EnvPushResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
