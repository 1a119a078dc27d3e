//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod favorites_file;
pub mod favorites_sqlite;
pub mod ports;
