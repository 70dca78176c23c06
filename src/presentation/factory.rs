//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::EnvSyncer;
use crate::config::Config;
use crate::domain::ports::SyncEventSink;
use crate::infrastructure::VercelCli;

/// Type alias for the concrete EnvSyncer driving the provider CLI
pub type ConcreteEnvSyncer = EnvSyncer<VercelCli>;

/// Directory the provider CLI runs in: the env file's parent
pub fn working_dir_for(env_file: &Path) -> PathBuf {
    env_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Create an env syncer for `env_file` with all dependencies wired up
pub fn create_env_syncer(
    config: &Config,
    env_file: &Path,
    events: Arc<dyn SyncEventSink>,
) -> ConcreteEnvSyncer {
    let store = VercelCli::new(&config.provider.bin, working_dir_for(env_file));
    EnvSyncer::new(config.sync.clone(), store).with_events(events)
}
