//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod skip_set;
mod target;

pub use skip_set::{SkipSet, VERCEL_OIDC_TOKEN};
pub use target::TargetEnvironment;
