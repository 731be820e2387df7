use crate::{FailureReason, Grid, Placement, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A word that could not be placed, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unplaced {
    pub word: String,
    pub reason: FailureReason,
}

/// A finished word search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<Placement>,
    unplaced: Vec<Unplaced>,
    /// Seed the puzzle was built from, when built from a [`crate::SeededRng`]
    seed: Option<u64>,
}

impl Puzzle {
    pub(crate) fn new(
        grid: Grid,
        placements: Vec<Placement>,
        unplaced: Vec<Unplaced>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            grid,
            placements,
            unplaced,
            seed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placed words in the order they were supplied
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words that ran out of attempts, in the order they were supplied
    pub fn unplaced(&self) -> &[Unplaced] {
        &self.unplaced
    }

    pub fn unplaced_words(&self) -> Vec<&str> {
        self.unplaced.iter().map(|u| u.word.as_str()).collect()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    pub fn word_count(&self) -> usize {
        self.placements.len() + self.unplaced.len()
    }

    /// True when every word made it into the grid
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// "N of M words placed"
    pub fn summary(&self) -> String {
        format!("{} of {} words placed", self.placed_count(), self.word_count())
    }

    /// Re-read every placement from the grid.
    ///
    /// Checks that each word reads back exactly along its path and that no
    /// two words demand different letters in a shared cell.
    pub fn verify(&self) -> bool {
        let mut claimed: HashMap<Position, char> = HashMap::new();
        for placement in &self.placements {
            let len = placement.word.chars().count();
            let read = self.grid.read_path(placement.start, placement.direction, len);
            if read.as_deref() != Some(placement.word.as_str()) {
                return false;
            }
            for (pos, ch) in placement.cells() {
                if *claimed.entry(pos).or_insert(ch) != ch {
                    return false;
                }
            }
        }
        self.grid.is_full()
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    fn sample() -> Puzzle {
        let mut grid = Grid::new(3, 3).unwrap();
        let placements = vec![
            Placement {
                word: "cat".into(),
                start: Position::new(0, 0),
                direction: Direction::East,
            },
            Placement {
                word: "tow".into(),
                start: Position::new(0, 2),
                direction: Direction::South,
            },
        ];
        for p in &placements {
            for (pos, ch) in p.cells() {
                grid.place(pos, ch);
            }
        }
        grid.fill_remaining(|| 'x');
        let unplaced = vec![Unplaced {
            word: "elephant".into(),
            reason: FailureReason::TooLong,
        }];
        Puzzle::new(grid, placements, unplaced, Some(10))
    }

    #[test]
    fn test_counts_and_summary() {
        let puzzle = sample();
        assert_eq!(puzzle.placed_count(), 2);
        assert_eq!(puzzle.word_count(), 3);
        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.summary(), "2 of 3 words placed");
        assert_eq!(puzzle.unplaced_words(), vec!["elephant"]);
        assert_eq!(puzzle.seed(), Some(10));
    }

    #[test]
    fn test_verify_detects_tampering() {
        let puzzle = sample();
        assert!(puzzle.verify());

        let mut broken = puzzle.clone();
        broken.grid.place(Position::new(1, 2), 'z');
        assert!(!broken.verify());
    }

    #[test]
    fn test_serde_roundtrip() {
        let puzzle = sample();
        let json = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, puzzle);
    }
}
