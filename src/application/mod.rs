//! Application Layer
//!
//! Use cases that orchestrate domain services and ports.

pub mod sync;

pub use sync::{EnvSyncer, SyncOptions, SyncReport};
