//! Remote Variable Store Port
//!
//! Abstracts the provider that holds per-target environment variables.
//! The syncer only ever removes and re-adds; it never reads values back.

use crate::domain::value_objects::TargetEnvironment;

/// Error from a store action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The provider command could not be started
    #[error("could not run provider: {0}")]
    Spawn(String),
    /// The provider ran and reported failure
    #[error("{0}")]
    Rejected(String),
}

/// Outcome of a best-effort removal
///
/// Removal exists so a following add does not collide with an existing
/// variable. Callers may drop the outcome; it is returned for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Failed(StoreError),
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed)
    }
}

/// Provider-side environment-variable store
pub trait RemoteVariableStore {
    /// Get a display name for this store
    fn display_name(&self) -> String;

    /// Remove `key` from `target`; never aborts a sync
    fn remove(&mut self, key: &str, target: TargetEnvironment) -> RemoveOutcome;

    /// Add `key` with `value` to `target`
    fn add(
        &mut self,
        key: &str,
        target: TargetEnvironment,
        value: &str,
    ) -> Result<(), StoreError>;
}
