//! Sync planning service
//!
//! Pure domain logic: decides which keys are pushed and in what order,
//! without touching the provider.

use crate::domain::entities::EnvFile;
use crate::domain::value_objects::{SkipSet, TargetEnvironment};

/// Keys eligible for sync: not skipped, non-empty value, sorted by byte order
pub fn eligible_keys(file: &EnvFile, skip: &SkipSet) -> Vec<String> {
    let mut keys: Vec<String> = file
        .entries()
        .iter()
        .filter(|entry| !skip.contains(entry.key()) && !entry.value().is_empty())
        .map(|entry| entry.key().to_string())
        .collect();
    keys.sort();
    keys
}

/// One remove+add pair against the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedVariable {
    pub key: String,
    pub value: String,
    pub target: TargetEnvironment,
}

/// Ordered list of variables to push (keys outermost, targets innermost)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    steps: Vec<PlannedVariable>,
}

impl SyncPlan {
    /// Build a plan for already-selected keys
    ///
    /// Keys missing from `file` are ignored.
    pub fn build(file: &EnvFile, keys: &[String], targets: &[TargetEnvironment]) -> Self {
        let steps = keys
            .iter()
            .filter_map(|key| file.get(key).map(|value| (key, value)))
            .flat_map(|(key, value)| {
                targets.iter().map(move |&target| PlannedVariable {
                    key: key.clone(),
                    value: value.to_string(),
                    target,
                })
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[PlannedVariable] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
