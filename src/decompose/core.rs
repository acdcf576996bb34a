use std::iter::FusedIterator;

use crate::error::Result;
use crate::figure::{Cell, Figure};
use crate::geometry::{Rect, Size};
use crate::render::render_block;

/// Per-cell scratch state recorded by the sweep.
///
/// For interior cells `left_run` and `up_run` count the spaces from this cell
/// back to the rectangle's left and top borders, inclusive of the cell
/// itself. `closed` marks boundary cells and interior cells whose runs are
/// sealed by a border on both the left and the top; background spaces that
/// reach the figure edge stay open and never close a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotation {
    pub left_run: usize,
    pub up_run: usize,
    pub closed: bool,
}

/// Lazy, single-pass iterator over the rectangles of a [`Figure`].
///
/// Each call to `next` resumes the row-major sweep where the previous one
/// stopped and yields as soon as a closing bottom-right corner is found.
#[derive(Debug, Clone)]
pub struct Rectangles<'a> {
    figure: &'a Figure,
    annotations: Vec<Annotation>,
    cursor: usize,
}

impl<'a> Rectangles<'a> {
    pub(crate) fn new(figure: &'a Figure) -> Self {
        Self {
            figure,
            annotations: vec![Annotation::default(); figure.size().area()],
            cursor: 0,
        }
    }

    /// Adapt the sequence into rendered ASCII blocks.
    pub fn blocks(self) -> impl Iterator<Item = String> + 'a {
        self.map(|rect| render_block(rect.size()))
    }

    /// Annotation recorded for a cell the sweep has already visited.
    pub fn annotation(&self, row: usize, col: usize) -> Option<Annotation> {
        let idx = self.index(row, col)?;
        (idx < self.cursor).then(|| self.annotations[idx])
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.figure.height() && col < self.figure.width())
            .then(|| row * self.figure.width() + col)
    }

    fn at(&self, row: usize, col: usize) -> Annotation {
        self.annotations[row * self.figure.width() + col]
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.figure.cell(row, col).unwrap_or(Cell::Space)
    }

    fn visit(&mut self, row: usize, col: usize) -> Option<Rect> {
        let annotation = match self.cell(row, col) {
            Cell::Plus => {
                if let Some(rect) = self.closing_rect(row, col) {
                    return Some(rect);
                }
                Annotation {
                    closed: true,
                    ..Annotation::default()
                }
            }
            Cell::Space => self.interior(row, col),
            Cell::HBar | Cell::VBar => Annotation {
                closed: true,
                ..Annotation::default()
            },
        };
        self.annotations[row * self.figure.width() + col] = annotation;
        None
    }

    fn interior(&self, row: usize, col: usize) -> Annotation {
        if row > 0
            && col > 0
            && self.cell(row - 1, col - 1) == Cell::Plus
            && self.cell(row, col - 1).is_vertical_edge()
            && self.cell(row - 1, col).is_horizontal_edge()
        {
            return Annotation {
                left_run: 1,
                up_run: 1,
                closed: true,
            };
        }

        let mut annotation = Annotation {
            left_run: 1,
            up_run: 1,
            closed: row > 0 && col > 0,
        };
        if col > 0 {
            annotation.closed &= self.seals(row, col - 1);
            if self.cell(row, col - 1) == Cell::Space {
                annotation.left_run = self.at(row, col - 1).left_run + 1;
            }
        }
        if row > 0 {
            annotation.closed &= self.seals(row - 1, col);
            if self.cell(row - 1, col) == Cell::Space {
                annotation.up_run = self.at(row - 1, col).up_run + 1;
            }
        }
        annotation
    }

    // Boundaries always seal; a space seals only if its own run was sealed.
    fn seals(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_boundary() || self.at(row, col).closed
    }

    fn closing_rect(&self, row: usize, col: usize) -> Option<Rect> {
        if row == 0 || col == 0 {
            return None;
        }
        let up = self.cell(row - 1, col);
        let left = self.cell(row, col - 1);

        match self.cell(row - 1, col - 1) {
            Cell::Space => {
                let inner = self.at(row - 1, col - 1);
                if !(inner.closed && up.is_vertical_edge() && left.is_horizontal_edge()) {
                    return None;
                }
                let rect = Rect::from_bottom_right(
                    row,
                    col,
                    Size::new(inner.left_run + 2, inner.up_run + 2),
                );
                // Enclosed background that is not itself a rectangle fails here.
                self.framed(rect).then_some(rect)
            }
            Cell::Plus if up == Cell::Plus && left == Cell::Plus => {
                Some(Rect::from_bottom_right(row, col, Size::new(2, 2)))
            }
            Cell::HBar | Cell::Plus if up == Cell::Plus && left.is_horizontal_edge() => {
                let width = self.flat_width(row, col)?;
                Some(Rect::from_bottom_right(row, col, Size::new(width, 2)))
            }
            Cell::VBar | Cell::Plus if left == Cell::Plus && up.is_vertical_edge() => {
                let height = self.thin_height(row, col)?;
                Some(Rect::from_bottom_right(row, col, Size::new(2, height)))
            }
            _ => None,
        }
    }

    /// Whether every border cell of `rect` is drawn, with a `+` in each corner.
    fn framed(&self, rect: Rect) -> bool {
        let (top, bottom) = (rect.y, rect.bottom() - 1);
        let (left, right) = (rect.x, rect.right() - 1);
        let corners = [(top, left), (top, right), (bottom, left), (bottom, right)];
        let horizontal = |row| (left + 1..right).all(|col| self.cell(row, col).is_horizontal_edge());
        let vertical = |col| (top + 1..bottom).all(|row| self.cell(row, col).is_vertical_edge());

        corners.into_iter().all(|(row, col)| self.cell(row, col) == Cell::Plus)
            && horizontal(top)
            && horizontal(bottom)
            && vertical(left)
            && vertical(right)
    }

    // Height-2 rectangle: walk left until both edge rows hold a `+`.
    fn flat_width(&self, row: usize, col: usize) -> Option<usize> {
        for left in (0..col - 1).rev() {
            let top = self.cell(row - 1, left);
            let bottom = self.cell(row, left);
            if top == Cell::Plus && bottom == Cell::Plus {
                return Some(col - left + 1);
            }
            if !top.is_horizontal_edge() || !bottom.is_horizontal_edge() {
                return None;
            }
        }
        None
    }

    // Width-2 rectangle: walk up until both edge columns hold a `+`.
    fn thin_height(&self, row: usize, col: usize) -> Option<usize> {
        for up in (0..row - 1).rev() {
            let left = self.cell(up, col - 1);
            let right = self.cell(up, col);
            if left == Cell::Plus && right == Cell::Plus {
                return Some(row - up + 1);
            }
            if !left.is_vertical_edge() || !right.is_vertical_edge() {
                return None;
            }
        }
        None
    }
}

impl Iterator for Rectangles<'_> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        let width = self.figure.width();
        while self.cursor < self.annotations.len() {
            let idx = self.cursor;
            self.cursor += 1;
            if let Some(rect) = self.visit(idx / width, idx % width) {
                return Some(rect);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.annotations.len() - self.cursor))
    }
}

impl FusedIterator for Rectangles<'_> {}

/// Parse `input` strictly and collect every rectangle it is made of.
pub fn decompose(input: &str) -> Result<Vec<Rect>> {
    let figure = Figure::parse(input)?;
    Ok(figure.rectangles().collect())
}

/// Parse `input` strictly and render each rectangle as a standalone block.
pub fn decompose_blocks(input: &str) -> Result<Vec<String>> {
    let figure = Figure::parse(input)?;
    Ok(figure.rectangles().blocks().collect())
}
