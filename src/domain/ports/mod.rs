//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod sync_events;
pub mod variable_store;

pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
pub use variable_store::{RemoteVariableStore, RemoveOutcome, StoreError};
