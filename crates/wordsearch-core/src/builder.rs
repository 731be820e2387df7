use crate::placement::DEFAULT_RETRY_BUDGET;
use crate::random::{entropy_seed, DEFAULT_SEED};
use crate::{
    Grid, PlacementEngine, PlacementOutcome, Puzzle, PuzzleError, PuzzleResult, RandomSource,
    SeededRng, Unplaced,
};
use serde::{Deserialize, Serialize};

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Conflicting attempts allowed per word
    pub retry_budget: usize,
    /// Seed for [`PuzzleBuilder::generate`]
    pub seed: u64,
    /// Off-grid draws allowed per word before giving up on it; scales with
    /// the grid when unset
    pub max_infeasible_draws: Option<usize>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            retry_budget: DEFAULT_RETRY_BUDGET,
            seed: DEFAULT_SEED,
            max_infeasible_draws: None,
        }
    }
}

impl PuzzleConfig {
    /// Square grid with default settings
    pub fn square(size: usize) -> Self {
        Self {
            rows: size,
            cols: size,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_retry_budget(mut self, retry_budget: usize) -> Self {
        self.retry_budget = retry_budget;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> PuzzleResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PuzzleError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.retry_budget == 0 {
            return Err(PuzzleError::InvalidRetryBudget);
        }
        Ok(())
    }
}

/// Builds word searches from a word list
///
/// Words are placed strictly in the order given; earlier words claim cells
/// that later words must avoid or share. Filler letters are drawn from the
/// same random source once every word has been tried.
#[derive(Debug, Clone, Default)]
pub struct PuzzleBuilder {
    config: PuzzleConfig,
}

impl PuzzleBuilder {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Build with the configured seed
    pub fn generate<S: AsRef<str>>(&self, words: &[S]) -> PuzzleResult<Puzzle> {
        self.generate_with_seed(words, self.config.seed)
    }

    /// Build with a seed from the operating system
    pub fn generate_random<S: AsRef<str>>(&self, words: &[S]) -> PuzzleResult<Puzzle> {
        self.generate_with_seed(words, entropy_seed())
    }

    pub fn generate_with_seed<S: AsRef<str>>(&self, words: &[S], seed: u64) -> PuzzleResult<Puzzle> {
        let mut rng = SeededRng::new(seed);
        let mut puzzle = self.build(words, &mut rng)?;
        puzzle.set_seed(seed);
        Ok(puzzle)
    }

    /// Build a puzzle drawing from `rng`
    pub fn build<S, R>(&self, words: &[S], rng: &mut R) -> PuzzleResult<Puzzle>
    where
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        self.config.validate()?;
        validate_words(words)?;

        let mut grid = Grid::new(self.config.rows, self.config.cols)?;
        let mut engine = PlacementEngine::new(self.config.retry_budget);
        if let Some(cap) = self.config.max_infeasible_draws {
            engine = engine.with_max_infeasible_draws(cap);
        }

        let mut placements = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        for word in words {
            let word = word.as_ref();
            match engine.try_place(&mut grid, word, rng)? {
                PlacementOutcome::Placed(placement) => placements.push(placement),
                PlacementOutcome::Failed(reason) => {
                    log::debug!("could not place {:?}: {}", word, reason);
                    unplaced.push(Unplaced {
                        word: word.to_string(),
                        reason,
                    });
                }
            }
        }

        grid.fill_remaining(|| rng.next_letter());

        let puzzle = Puzzle::new(grid, placements, unplaced, None);
        log::info!(
            "{} in a {}x{} grid",
            puzzle.summary(),
            self.config.rows,
            self.config.cols
        );
        Ok(puzzle)
    }
}

/// Reject empty words and anything outside a-z before any draw is made
fn validate_words<S: AsRef<str>>(words: &[S]) -> PuzzleResult<()> {
    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(PuzzleError::EmptyWordRejected { index });
        }
        if let Some(ch) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(PuzzleError::InvalidCharacter {
                word: word.to_string(),
                ch,
            });
        }
    }
    Ok(())
}
