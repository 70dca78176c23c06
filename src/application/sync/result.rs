//! Sync Result

use crate::domain::ports::StoreError;
use crate::domain::value_objects::TargetEnvironment;

/// What a sync run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Keys selected for sync, sorted
    pub keys: Vec<String>,
    /// (key, target) pairs that were added (or would be, in a dry run)
    pub synced: Vec<(String, TargetEnvironment)>,
    /// Removals that failed; informational only
    pub remove_failures: Vec<(String, TargetEnvironment, StoreError)>,
    pub dry_run: bool,
}

impl SyncReport {
    pub fn synced_count(&self) -> usize {
        self.synced.len()
    }

    pub fn has_remove_failures(&self) -> bool {
        !self.remove_failures.is_empty()
    }
}
