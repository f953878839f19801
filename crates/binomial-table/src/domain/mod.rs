//! Domain layer - Pure computational logic
//!
//! This module contains the strategies, the triangular storage scheme and
//! the coefficient table itself, without any I/O.

pub mod strategy;
pub mod table;
pub mod triangle;
