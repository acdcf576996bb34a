//! Rendering module orchestrator.
//!
//! Turns rectangles back into ASCII: standalone blocks, a writer that streams
//! blocks, and a canvas that redraws a packing into a single figure.

mod core;

pub use self::core::{BlockRenderer, Canvas, RendererSettings, render_block};
