//! Domain Entities
//!
//! - `EnvFile` - parsed key/value contents of a local env file

mod env_file;

pub use env_file::{DuplicateKey, EnvEntry, EnvFile};
