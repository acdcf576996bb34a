//! Break ASCII-art figures into the rectangles they are made of.
//!
//! A figure is a grid of `+`, `-`, `|` and spaces describing axis-aligned
//! rectangles that may share edges. A single row-major sweep annotates every
//! cell with interior run lengths and yields each rectangle the moment its
//! bottom-right corner is reached.
//!
//! ```
//! use figure_rects::{Figure, Rect};
//!
//! let figure: Figure = "+--+---+\n|  |   |\n+--+---+\n".parse()?;
//! let rects: Vec<Rect> = figure.rectangles().collect();
//! assert_eq!(rects, vec![Rect::new(0, 0, 4, 3), Rect::new(3, 0, 5, 3)]);
//! # Ok::<(), figure_rects::FigureError>(())
//! ```

pub mod decompose;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod session;

pub use decompose::{Annotation, Rectangles, decompose, decompose_blocks};
pub use error::{FigureError, Result};
pub use figure::{Cell, Figure, ValidationMode};
pub use geometry::{Rect, Size};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{DecomposeMetrics, MetricSnapshot};
pub use render::{BlockRenderer, Canvas, RendererSettings, render_block};
pub use session::{Decomposer, DecomposerConfig};
