//! Error types for envpush
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::TargetEnvironment;

/// Result type alias for envpush operations
pub type EnvPushResult<T> = Result<T, EnvPushError>;

/// Top-level error for a sync run
#[derive(Error, Debug)]
pub enum EnvPushError {
    /// Fatal before any remote action was attempted
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// An add action failed; earlier keys stay synced
    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Problems with the local inputs: env file, config file, or their contents
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("env file not found: {}", .path.display())]
    MissingEnvFile { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no variables to sync (every key is empty or skipped)")]
    NoEligibleKeys,

    #[error("config file not found: {}", .path.display())]
    MissingConfigFile { path: PathBuf },

    #[error("invalid config in {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("no target environments configured in {}", .path.display())]
    NoTargets { path: PathBuf },

    #[error("unknown target environment '{value}' (expected development, preview or production)")]
    UnknownTarget { value: String },
}

/// The provider rejected an `env add`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to add {key} to {target}: {message}")]
pub struct SyncError {
    pub key: String,
    pub target: TargetEnvironment,
    pub message: String,
}
