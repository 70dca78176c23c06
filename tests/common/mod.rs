//! Common test utilities for envpush CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory with a fake provider CLI
//! - `TestResult`: captured output of one envpush run

pub mod env;

pub use env::*;
