//! Sync Options

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Plan only; make no store calls
    pub dry_run: bool,
}
