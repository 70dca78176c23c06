//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Parsed env file contents
//! - `value_objects/` - Target environments, skip set
//! - `services/` - Key selection and sync planning
//! - `ports/` - Interfaces implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
