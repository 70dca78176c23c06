//! envpush - push a local `.env` file into a hosting provider's environment-variable store
//!
//! Reads `KEY=VALUE` lines, drops skipped and empty keys, and for every
//! remaining key and target environment runs the provider's
//! `env rm` followed by `env add`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{EnvSyncer, SyncOptions, SyncReport};
pub use config::{Config, SyncConfig};
pub use domain::entities::{EnvEntry, EnvFile};
pub use domain::ports::{RemoteVariableStore, RemoveOutcome, StoreError};
pub use domain::value_objects::{SkipSet, TargetEnvironment};
pub use error::{ConfigurationError, EnvPushError, EnvPushResult, SyncError};
pub use infrastructure::{InMemoryVariableStore, VercelCli};
