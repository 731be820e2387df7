use crate::{Direction, PuzzleError, PuzzleResult};
use serde::{Deserialize, Serialize};

/// A cell position in the grid (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `direction`.
    ///
    /// Returns `None` when the result would have a negative coordinate; the
    /// upper bound is left to [`Grid::in_bounds`].
    pub fn offset(self, direction: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(steps)?)?;
        Some(Position::new(row, col))
    }
}

/// A fixed-size letter grid
///
/// Every cell is either empty (`None`) or holds one lowercase letter.
/// Dimensions are set at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

/// Unchecked wire form of [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = PuzzleError;

    fn try_from(raw: RawGrid) -> PuzzleResult<Self> {
        let len = Grid::cell_count(raw.rows, raw.cols)?;
        if raw.cells.len() != len {
            return Err(PuzzleError::MalformedGrid(format!(
                "{}x{} grid needs {} cells, found {}",
                raw.rows,
                raw.cols,
                len,
                raw.cells.len()
            )));
        }
        if let Some(ch) = raw.cells.iter().flatten().find(|c| !c.is_ascii_lowercase()) {
            return Err(PuzzleError::MalformedGrid(format!(
                "cell holds {:?}, expected a-z",
                ch
            )));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Largest grid accepted, in cells
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> PuzzleResult<Self> {
        let len = Self::cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; len],
        })
    }

    fn cell_count(rows: usize, cols: usize) -> PuzzleResult<usize> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }
        rows.checked_mul(cols)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(PuzzleError::InvalidDimensions { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// True if the cell is in bounds and holds no letter
    pub fn is_empty(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[self.index(pos)].is_none()
    }

    /// Current contents of a cell
    pub fn letter_at(&self, pos: Position) -> PuzzleResult<Option<char>> {
        if !self.in_bounds(pos) {
            return Err(PuzzleError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[self.index(pos)])
    }

    /// Overwrite a cell. The caller validates the position.
    pub fn place(&mut self, pos: Position, letter: char) {
        debug_assert!(self.in_bounds(pos), "place outside grid: {:?}", pos);
        let idx = self.index(pos);
        self.cells[idx] = Some(letter);
    }

    /// Write a generated letter into every empty cell, in row-major order
    pub fn fill_remaining<F>(&mut self, mut random_letter: F)
    where
        F: FnMut() -> char,
    {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(random_letter());
        }
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Read `len` letters starting at `start` and walking `direction`.
    ///
    /// Returns `None` if the path leaves the grid or crosses an empty cell.
    pub fn read_path(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                let pos = start.offset(direction, i)?;
                self.letter_at(pos).ok().flatten()
            })
            .collect()
    }

    /// One row as a string, `.` for empty cells
    pub fn row_string(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|c| c.unwrap_or('.'))
            .collect()
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows).map(|r| self.row_string(r)).collect()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = self
                .row_string(row)
                .chars()
                .map(|c| c.to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
