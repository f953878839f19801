//! Application layer - Use case implementations
//!
//! This module coordinates the domain layer to build and verify tables.

pub mod builder;
pub mod verify;
