use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the figure decomposer.
pub type Result<T> = std::result::Result<T, FigureError>;

/// Errors surfaced while reading, decomposing, or rendering figures.
///
/// Row and column positions are 1-based so they line up with what an editor
/// shows for the offending figure.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("figure is empty")]
    EmptyFigure,
    #[error("row {row} is {found} columns wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {found:?} at row {row}, column {column}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FigureError {
    /// Position of the offending cell as `(row, column)`, when the error has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => Some((*row, (*expected).min(*found) + 1)),
            Self::InvalidCharacter { row, column, .. } => Some((*row, *column)),
            _ => None,
        }
    }
}
