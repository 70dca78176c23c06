//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `env_file` - Reading env files from disk
//! - `store/` - Variable store implementations (Vercel CLI, in-memory)

pub mod env_file;
pub mod store;

// Re-export for convenience
pub use env_file::read_env_file;
pub use store::{InMemoryVariableStore, StoreCall, VercelCli};
