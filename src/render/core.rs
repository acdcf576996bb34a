use std::io::Write;

use crate::error::Result;
use crate::figure::{Cell, Figure};
use crate::geometry::{Rect, Size};

/// Render a standalone rectangle of `size` as newline-terminated ASCII.
///
/// ```
/// use figure_rects::{Size, render_block};
///
/// assert_eq!(render_block(Size::new(4, 3)), "+--+\n|  |\n+--+\n");
/// ```
pub fn render_block(size: Size) -> String {
    let inner = size.width.saturating_sub(2);
    let edge = format!("+{}+\n", "-".repeat(inner));
    let middle = format!("|{}|\n", " ".repeat(inner));

    let mut block = String::with_capacity((inner + 3) * size.height);
    block.push_str(&edge);
    for _ in 0..size.height.saturating_sub(2) {
        block.push_str(&middle);
    }
    block.push_str(&edge);
    block
}

/// Block writer parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Written between consecutive blocks.
    pub separator: String,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
        }
    }
}

/// Streams rectangles to a writer as standalone ASCII blocks.
pub struct BlockRenderer {
    settings: RendererSettings,
}

impl BlockRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Write every rectangle and return how many were written.
    pub fn render(
        &mut self,
        writer: &mut impl Write,
        rects: impl IntoIterator<Item = Rect>,
    ) -> Result<usize> {
        let mut written = 0;
        for rect in rects {
            if written > 0 {
                writer.write_all(self.settings.separator.as_bytes())?;
            }
            writer.write_all(render_block(rect.size()).as_bytes())?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }
}

/// Character grid that rectangles are drawn onto, merging shared edges.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![Cell::Space; size.area()],
        }
    }

    /// Smallest canvas holding every rectangle, with all of them drawn.
    pub fn from_rects(rects: impl IntoIterator<Item = Rect>) -> Self {
        let rects: Vec<Rect> = rects.into_iter().collect();
        let width = rects.iter().map(Rect::right).max().unwrap_or(0);
        let height = rects.iter().map(Rect::bottom).max().unwrap_or(0);

        let mut canvas = Self::new(Size::new(width, height));
        for rect in rects {
            canvas.draw(rect);
        }
        canvas
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Draw the border of `rect`. Returns `false`, drawing nothing, when the
    /// rectangle is degenerate or does not fit.
    pub fn draw(&mut self, rect: Rect) -> bool {
        if rect.width < 2
            || rect.height < 2
            || rect.right() > self.size.width
            || rect.bottom() > self.size.height
        {
            return false;
        }

        let (top, bottom) = (rect.y, rect.bottom() - 1);
        let (left, right) = (rect.x, rect.right() - 1);
        for col in left..=right {
            for row in [top, bottom] {
                let stroke = if col == left || col == right {
                    Cell::Plus
                } else {
                    Cell::HBar
                };
                self.stroke(row, col, stroke);
            }
        }
        for row in top + 1..bottom {
            for col in [left, right] {
                self.stroke(row, col, Cell::VBar);
            }
        }
        true
    }

    fn stroke(&mut self, row: usize, col: usize, stroke: Cell) {
        let slot = &mut self.cells[row * self.size.width + col];
        *slot = match (*slot, stroke) {
            (Cell::Space, next) => next,
            (current, next) if current == next => current,
            _ => Cell::Plus,
        };
    }

    /// Freeze the canvas into a figure, or `None` if nothing fits on it.
    pub fn to_figure(&self) -> Option<Figure> {
        (self.size.area() > 0).then(|| Figure::from_cells(self.size, self.cells.clone()))
    }

    /// Newline-terminated rows, the same layout [`Figure::parse`] accepts.
    pub fn render(&self) -> String {
        self.to_figure()
            .map(|figure| figure.to_string())
            .unwrap_or_default()
    }
}
