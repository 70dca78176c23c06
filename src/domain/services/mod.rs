//! Domain Services
//!
//! Stateless logic operating on domain entities.

mod planner;

pub use planner::{eligible_keys, PlannedVariable, SyncPlan};
