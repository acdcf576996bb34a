//! Figure module orchestrator.
//!
//! Parsing and validation live in the private `core` module; downstream code
//! imports the grid types from here.

mod core;

pub use self::core::{Cell, Figure, ValidationMode};
