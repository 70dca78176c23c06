//! In-memory variable store
//!
//! Records every call so sync logic can be checked without a provider CLI.

use std::collections::{BTreeMap, HashSet};

use crate::domain::ports::{RemoteVariableStore, RemoveOutcome, StoreError};
use crate::domain::value_objects::TargetEnvironment;

/// A call made against the store, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Remove {
        key: String,
        target: TargetEnvironment,
    },
    Add {
        key: String,
        target: TargetEnvironment,
        value: String,
    },
}

/// Fake store holding variables in a map
#[derive(Debug, Default)]
pub struct InMemoryVariableStore {
    variables: BTreeMap<(TargetEnvironment, String), String>,
    calls: Vec<StoreCall>,
    failing_adds: HashSet<String>,
}

impl InMemoryVariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a variable
    pub fn with_variable(
        mut self,
        key: &str,
        target: TargetEnvironment,
        value: &str,
    ) -> Self {
        self.variables
            .insert((target, key.to_string()), value.to_string());
        self
    }

    /// Make every `add` of `key` fail
    pub fn failing_add(mut self, key: &str) -> Self {
        self.failing_adds.insert(key.to_string());
        self
    }

    pub fn get(&self, key: &str, target: TargetEnvironment) -> Option<&str> {
        self.variables
            .get(&(target, key.to_string()))
            .map(String::as_str)
    }

    pub fn calls(&self) -> &[StoreCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl RemoteVariableStore for InMemoryVariableStore {
    fn display_name(&self) -> String {
        "memory".to_string()
    }

    fn remove(&mut self, key: &str, target: TargetEnvironment) -> RemoveOutcome {
        self.calls.push(StoreCall::Remove {
            key: key.to_string(),
            target,
        });
        match self.variables.remove(&(target, key.to_string())) {
            Some(_) => RemoveOutcome::Removed,
            None => RemoveOutcome::Failed(StoreError::Rejected(format!(
                "Environment Variable \"{}\" was not found in {}",
                key, target
            ))),
        }
    }

    fn add(
        &mut self,
        key: &str,
        target: TargetEnvironment,
        value: &str,
    ) -> Result<(), StoreError> {
        self.calls.push(StoreCall::Add {
            key: key.to_string(),
            target,
            value: value.to_string(),
        });
        if self.failing_adds.contains(key) {
            return Err(StoreError::Rejected(format!("refused to add {}", key)));
        }
        let slot = (target, key.to_string());
        if self.variables.contains_key(&slot) {
            return Err(StoreError::Rejected(format!(
                "A variable with the name \"{}\" already exists for {}",
                key, target
            )));
        }
        self.variables.insert(slot, value.to_string());
        Ok(())
    }
}
