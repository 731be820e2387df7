//! Word-search puzzle generation
//!
//! Words are dropped into a letter grid one at a time along any of the eight
//! compass directions. A word may cross another only where both need the
//! same letter. Leftover cells are filled with random letters. All
//! randomness flows through a caller-supplied [`RandomSource`], so a fixed
//! seed always reproduces the same puzzle.
//!
//! ```
//! use wordsearch_core::{prepare_word_list, PuzzleBuilder, PuzzleConfig};
//!
//! let words = prepare_word_list(["Cat", "dog!", "owl"]);
//! let puzzle = PuzzleBuilder::new(PuzzleConfig::square(6))
//!     .generate(&words)
//!     .unwrap();
//! assert!(puzzle.grid().is_full());
//! assert!(puzzle.verify());
//! ```

mod builder;
mod direction;
mod error;
mod grid;
mod placement;
mod puzzle;
pub mod random;
mod words;

pub use builder::{PuzzleBuilder, PuzzleConfig};
pub use direction::Direction;
pub use error::{PuzzleError, PuzzleResult};
pub use grid::{Grid, Position};
pub use placement::{
    default_infeasible_cap, FailureReason, Placement, PlacementEngine, PlacementOutcome,
    DEFAULT_RETRY_BUDGET, INFEASIBLE_DRAWS_PER_SLOT,
};
pub use puzzle::{Puzzle, Unplaced};
pub use random::{RandomSource, ScriptedRng, SeededRng, DEFAULT_SEED};
pub use words::{prepare_word_list, sanitize};
