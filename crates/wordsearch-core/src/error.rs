use crate::{Grid, Position};

/// Result type for puzzle construction
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Errors that abort puzzle construction
///
/// A word that cannot be placed is not an error: it is reported through
/// [`crate::Puzzle::unplaced`] and generation carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Grid rows or columns were zero, or the grid is too large
    InvalidDimensions { rows: usize, cols: usize },
    /// Retry budget was zero
    InvalidRetryBudget,
    /// A zero-length word reached the builder
    EmptyWordRejected { index: usize },
    /// A word held something other than a lowercase a-z letter
    InvalidCharacter { word: String, ch: char },
    /// A grid read outside its dimensions
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
    /// Serialized grid data did not describe a valid grid
    MalformedGrid(String),
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid grid dimensions {}x{}: both must be positive and at most {} cells in total",
                    rows,
                    cols,
                    Grid::MAX_CELLS
                )
            }
            Self::InvalidRetryBudget => write!(f, "Retry budget must be at least 1"),
            Self::EmptyWordRejected { index } => {
                write!(f, "Word at index {} is empty after sanitization", index)
            }
            Self::InvalidCharacter { word, ch } => {
                write!(f, "Word {:?} contains invalid character {:?}", word, ch)
            }
            Self::OutOfBounds {
                position,
                rows,
                cols,
            } => write!(
                f,
                "Position ({}, {}) is outside the {}x{} grid",
                position.row, position.col, rows, cols
            ),
            Self::MalformedGrid(reason) => write!(f, "Malformed grid: {}", reason),
        }
    }
}

impl std::error::Error for PuzzleError {}
