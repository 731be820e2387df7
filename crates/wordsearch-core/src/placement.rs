//! Randomised placement of a single word
//!
//! Each attempt draws a direction, then a start row, then a start column.
//! Draws whose path leaves the grid are redrawn without using up an attempt;
//! draws that collide with a different letter already in the grid use up one
//! attempt. A word is written only once a whole path is known to be free, so
//! a failed word never leaves letters behind.

use crate::{Direction, Grid, Position, PuzzleError, PuzzleResult, RandomSource};
use serde::{Deserialize, Serialize};

/// Default number of conflicting attempts allowed per word
pub const DEFAULT_RETRY_BUDGET: usize = 3;

/// Off-grid draws allowed per (direction, row, col) slot when no cap is set
pub const INFEASIBLE_DRAWS_PER_SLOT: usize = 16;

/// Default cap on off-grid draws for one word in a `rows` x `cols` grid.
///
/// A word that fits the grid at all has at least two feasible slots out of
/// `8 * rows * cols`, so this cap is only hit with probability below e^-32.
pub fn default_infeasible_cap(rows: usize, cols: usize) -> usize {
    Direction::COUNT
        .saturating_mul(rows)
        .saturating_mul(cols)
        .saturating_mul(INFEASIBLE_DRAWS_PER_SLOT)
}

/// Where a word was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the word, first letter first
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word.chars().enumerate().filter_map(move |(i, ch)| {
            self.start.offset(self.direction, i).map(|pos| (pos, ch))
        })
    }

    pub fn end(&self) -> Option<Position> {
        let len = self.word.chars().count();
        self.start.offset(self.direction, len.saturating_sub(1))
    }
}

/// Why a word could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Longer than both grid dimensions, so no path can hold it
    TooLong,
    /// Every attempt hit a conflicting letter
    RetriesExhausted { attempts: usize },
    /// Too many draws ran off the grid before the budget was spent
    DrawCapReached { draws: usize },
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong => write!(f, "longer than the grid"),
            Self::RetriesExhausted { attempts } => {
                write!(f, "no conflict-free spot after {} attempts", attempts)
            }
            Self::DrawCapReached { draws } => {
                write!(f, "{} draws ran off the grid", draws)
            }
        }
    }
}

/// Result of trying to place one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed(Placement),
    Failed(FailureReason),
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }
}

/// Places single words into a grid
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine {
    retry_budget: usize,
    max_infeasible_draws: Option<usize>,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_BUDGET)
    }
}

impl PlacementEngine {
    pub fn new(retry_budget: usize) -> Self {
        Self {
            retry_budget,
            max_infeasible_draws: None,
        }
    }

    /// Fix the off-grid draw cap instead of scaling it with the grid
    pub fn with_max_infeasible_draws(mut self, max_infeasible_draws: usize) -> Self {
        self.max_infeasible_draws = Some(max_infeasible_draws.max(1));
        self
    }

    /// Off-grid draw cap used for `grid`
    pub fn infeasible_cap(&self, grid: &Grid) -> usize {
        self.max_infeasible_draws
            .unwrap_or_else(|| default_infeasible_cap(grid.rows(), grid.cols()))
    }

    pub fn retry_budget(&self) -> usize {
        self.retry_budget
    }

    /// Search for a conflict-free spot for `word` and write it.
    ///
    /// The word must be non-empty lowercase a-z; the builder checks this for
    /// whole word lists before any draw is made.
    pub fn try_place<R>(
        &self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> PuzzleResult<PlacementOutcome>
    where
        R: RandomSource + ?Sized,
    {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Err(PuzzleError::EmptyWordRejected { index: 0 });
        }

        let len = letters.len();
        if len > grid.rows().max(grid.cols()) {
            log::debug!(
                "{:?} ({} letters) cannot fit a {}x{} grid",
                word,
                len,
                grid.rows(),
                grid.cols()
            );
            return Ok(PlacementOutcome::Failed(FailureReason::TooLong));
        }

        let cap = self.infeasible_cap(grid);
        let mut attempts = 0;
        let mut infeasible = 0;

        while attempts < self.retry_budget {
            let direction = Direction::ALL[rng.next_index(Direction::COUNT)];
            let start = Position::new(rng.next_index(grid.rows()), rng.next_index(grid.cols()));
            log::trace!("{:?}: drew {} from {:?}", word, direction, start);

            let fits = start
                .offset(direction, len - 1)
                .is_some_and(|end| grid.in_bounds(end));
            if !fits {
                infeasible += 1;
                if infeasible >= cap {
                    log::debug!("{:?}: gave up after {} off-grid draws", word, infeasible);
                    return Ok(PlacementOutcome::Failed(FailureReason::DrawCapReached {
                        draws: infeasible,
                    }));
                }
                continue;
            }

            if self.is_conflict_free(grid, &letters, start, direction)? {
                for (i, &ch) in letters.iter().enumerate() {
                    if let Some(pos) = start.offset(direction, i) {
                        grid.place(pos, ch);
                    }
                }
                log::debug!("placed {:?} at {:?} going {}", word, start, direction);
                return Ok(PlacementOutcome::Placed(Placement {
                    word: word.to_string(),
                    start,
                    direction,
                }));
            }

            attempts += 1;
            log::debug!(
                "{:?}: conflict at {:?} going {} (attempt {}/{})",
                word,
                start,
                direction,
                attempts,
                self.retry_budget
            );
        }

        Ok(PlacementOutcome::Failed(FailureReason::RetriesExhausted {
            attempts,
        }))
    }

    /// Every cell on the path is empty or already holds the needed letter
    fn is_conflict_free(
        &self,
        grid: &Grid,
        letters: &[char],
        start: Position,
        direction: Direction,
    ) -> PuzzleResult<bool> {
        for (i, &ch) in letters.iter().enumerate() {
            let pos = start
                .offset(direction, i)
                .ok_or(PuzzleError::OutOfBounds {
                    position: start,
                    rows: grid.rows(),
                    cols: grid.cols(),
                })?;
            match grid.letter_at(pos)? {
                None => {}
                Some(existing) if existing == ch => {}
                Some(_) => return Ok(false),
            }
        }
        Ok(true)
    }
}
