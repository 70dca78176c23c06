//! Sync Event Port
//!
//! Provides an observable interface for sync runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::TargetEnvironment;

/// Event emitted during a sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SyncEvent {
    /// Env file parsed and keys selected
    Started {
        source: PathBuf,
        store: String,
        keys: Vec<String>,
        targets: Vec<TargetEnvironment>,
        dry_run: bool,
    },

    /// A key was assigned more than once; the later line won
    DuplicateKey {
        key: String,
        first_line: usize,
        overriding_line: usize,
    },

    /// Dry run: this pair would be pushed
    Planned {
        key: String,
        target: TargetEnvironment,
    },

    /// Best-effort removal finished (successfully or not)
    Removed {
        key: String,
        target: TargetEnvironment,
        ok: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },

    /// Variable added
    Added {
        key: String,
        target: TargetEnvironment,
    },

    /// Add failed; the run stops here
    Failed {
        key: String,
        target: TargetEnvironment,
        error: String,
    },

    /// Run finished
    Completed {
        synced: usize,
        remove_failures: usize,
        dry_run: bool,
    },
}

/// Trait for receiving sync events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait SyncEventSink {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
