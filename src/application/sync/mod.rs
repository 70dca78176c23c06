//! Env sync use case

mod options;
mod result;
mod use_case;

pub use options::SyncOptions;
pub use result::SyncReport;
pub use use_case::EnvSyncer;
