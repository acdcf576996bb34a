use std::fmt;
use std::str::FromStr;

use crate::decompose::Rectangles;
use crate::error::{FigureError, Result};
use crate::geometry::Size;

/// One character of an ASCII figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `+`, a corner or a junction of edges.
    Plus,
    /// `-`, part of a horizontal edge.
    HBar,
    /// `|`, part of a vertical edge.
    VBar,
    /// ` `, interior or background.
    Space,
}

impl Cell {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::HBar),
            '|' => Some(Self::VBar),
            ' ' => Some(Self::Space),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::HBar => '-',
            Self::VBar => '|',
            Self::Space => ' ',
        }
    }

    pub const fn is_boundary(self) -> bool {
        !matches!(self, Self::Space)
    }

    /// `-` or `+`: the cell can belong to a horizontal edge.
    pub const fn is_horizontal_edge(self) -> bool {
        matches!(self, Self::HBar | Self::Plus)
    }

    /// `|` or `+`: the cell can belong to a vertical edge.
    pub const fn is_vertical_edge(self) -> bool {
        matches!(self, Self::VBar | Self::Plus)
    }
}

/// How strictly [`Figure::parse_with`] checks its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Reject ragged rows and characters other than `+`, `-`, `|` and space.
    #[default]
    Strict,
    /// Pad short rows and read foreign characters as spaces.
    Lenient,
}

/// Rectangular character grid parsed from an ASCII figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Figure {
    /// Parse a `\n`-delimited figure, rejecting malformed input.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, ValidationMode::Strict)
    }

    pub fn parse_with(input: &str, mode: ValidationMode) -> Result<Self> {
        let body = input.strip_suffix('\n').unwrap_or(input);
        if body.is_empty() {
            return Err(FigureError::EmptyFigure);
        }

        let rows: Vec<&str> = body.split('\n').collect();
        let width = match mode {
            ValidationMode::Strict => rows[0].chars().count(),
            ValidationMode::Lenient => rows
                .iter()
                .map(|row| row.chars().count())
                .max()
                .unwrap_or(0),
        };
        if width == 0 {
            return Err(FigureError::EmptyFigure);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let mut found = 0;
            for (col_idx, ch) in row.chars().enumerate() {
                found += 1;
                let cell = match (Cell::from_char(ch), mode) {
                    (Some(cell), _) => cell,
                    (None, ValidationMode::Lenient) => Cell::Space,
                    (None, ValidationMode::Strict) => {
                        return Err(FigureError::InvalidCharacter {
                            row: row_idx + 1,
                            column: col_idx + 1,
                            found: ch,
                        });
                    }
                };
                if col_idx < width {
                    cells.push(cell);
                }
            }

            if found != width {
                if mode == ValidationMode::Strict {
                    return Err(FigureError::RaggedRow {
                        row: row_idx + 1,
                        expected: width,
                        found,
                    });
                }
                cells.extend(std::iter::repeat_n(Cell::Space, width.saturating_sub(found)));
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of `+`, `-` and `|` cells.
    pub fn boundary_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_boundary()).count()
    }

    /// Lazily decompose the figure into the rectangles it is made of.
    pub fn rectangles(&self) -> Rectangles<'_> {
        Rectangles::new(self)
    }

    pub(crate) fn from_cells(size: Size, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(size.area(), cells.len());
        Self {
            width: size.width,
            height: size.height,
            cells,
        }
    }
}

impl FromStr for Figure {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders the grid back as newline-terminated rows.
impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
