//! Remote Variable Store implementations
//!
//! - `VercelCli` - shells out to the provider CLI
//! - `InMemoryVariableStore` - records calls, for tests and local experiments

mod memory;
mod vercel;

pub use memory::{InMemoryVariableStore, StoreCall};
pub use vercel::VercelCli;
