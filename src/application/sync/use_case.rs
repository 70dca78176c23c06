//! Env Sync Use Case
//!
//! Orchestrates a sync run:
//! 1. Read and parse the env file
//! 2. Select eligible keys (skip set, empty values)
//! 3. For each key, for each target: remove, then add
//!
//! The first failed add ends the run. Earlier keys stay pushed.

use std::path::Path;
use std::sync::Arc;

use crate::config::SyncConfig;
use crate::domain::entities::EnvFile;
use crate::domain::ports::{
    NoopEventSink, RemoteVariableStore, RemoveOutcome, SyncEvent, SyncEventSink,
};
use crate::domain::services::{eligible_keys, SyncPlan};
use crate::domain::value_objects::TargetEnvironment;
use crate::error::{ConfigurationError, EnvPushResult, SyncError};
use crate::infrastructure::read_env_file;

use super::options::SyncOptions;
use super::result::SyncReport;

/// Mirrors a local env file into a remote variable store
pub struct EnvSyncer<S>
where
    S: RemoteVariableStore,
{
    config: SyncConfig,
    store: S,
    events: Arc<dyn SyncEventSink>,
}

impl<S> EnvSyncer<S>
where
    S: RemoteVariableStore,
{
    pub fn new(config: SyncConfig, store: S) -> Self {
        Self {
            config,
            store,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn SyncEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store (e.g. to inspect a fake after a run)
    pub fn into_store(self) -> S {
        self.store
    }

    /// Read and parse the env file at `path`
    pub fn parse(&self, path: &Path) -> EnvPushResult<EnvFile> {
        Ok(read_env_file(path)?)
    }

    /// Sorted keys to push; errors if none are eligible
    pub fn select_keys(&self, file: &EnvFile) -> Result<Vec<String>, ConfigurationError> {
        let keys = eligible_keys(file, &self.config.skip);
        if keys.is_empty() {
            return Err(ConfigurationError::NoEligibleKeys);
        }
        Ok(keys)
    }

    /// Remove then add one variable
    ///
    /// The removal outcome is returned for reporting only.
    pub fn sync(
        &mut self,
        key: &str,
        value: &str,
        target: TargetEnvironment,
    ) -> Result<RemoveOutcome, SyncError> {
        let removed = self.store.remove(key, target);
        self.events.on_event(SyncEvent::Removed {
            key: key.to_string(),
            target,
            ok: removed.is_removed(),
            error: match &removed {
                RemoveOutcome::Removed => None,
                RemoveOutcome::Failed(e) => Some(e.to_string()),
            },
        });

        if let Err(e) = self.store.add(key, target, value) {
            self.events.on_event(SyncEvent::Failed {
                key: key.to_string(),
                target,
                error: e.to_string(),
            });
            return Err(SyncError {
                key: key.to_string(),
                target,
                message: e.to_string(),
            });
        }

        self.events.on_event(SyncEvent::Added {
            key: key.to_string(),
            target,
        });
        Ok(removed)
    }

    /// Run a full sync of the env file at `path`
    pub fn run(&mut self, path: &Path, options: SyncOptions) -> EnvPushResult<SyncReport> {
        let file = self.parse(path)?;

        for dup in file.duplicates() {
            self.events.on_event(SyncEvent::DuplicateKey {
                key: dup.key.clone(),
                first_line: dup.first_line,
                overriding_line: dup.overriding_line,
            });
        }

        let keys = self.select_keys(&file)?;
        let plan = SyncPlan::build(&file, &keys, &self.config.targets);

        self.events.on_event(SyncEvent::Started {
            source: path.to_path_buf(),
            store: self.store.display_name(),
            keys: keys.clone(),
            targets: self.config.targets.clone(),
            dry_run: options.dry_run,
        });

        let mut report = SyncReport {
            keys,
            dry_run: options.dry_run,
            ..SyncReport::default()
        };

        for step in plan.steps() {
            if options.dry_run {
                self.events.on_event(SyncEvent::Planned {
                    key: step.key.clone(),
                    target: step.target,
                });
            } else if let RemoveOutcome::Failed(e) =
                self.sync(&step.key, &step.value, step.target)?
            {
                report
                    .remove_failures
                    .push((step.key.clone(), step.target, e));
            }
            report.synced.push((step.key.clone(), step.target));
        }

        self.events.on_event(SyncEvent::Completed {
            synced: report.synced.len(),
            remove_failures: report.remove_failures.len(),
            dry_run: options.dry_run,
        });

        Ok(report)
    }
}
