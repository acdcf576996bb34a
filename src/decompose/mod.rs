//! Decomposition module orchestrator.
//!
//! The sweep itself lives in the private `core` module. `decompose` and
//! `decompose_blocks` are the string-in convenience entry points; use
//! [`Figure::rectangles`](crate::Figure::rectangles) for the lazy form.

mod core;

pub use self::core::{Annotation, Rectangles, decompose, decompose_blocks};
