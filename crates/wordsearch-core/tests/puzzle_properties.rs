//! Invariants that hold for any seed and word list.
//!
//! - Rebuilding with the same seed gives a byte-identical grid and the same
//!   unplaced list.
//! - Every placement reads back along its recorded path.
//! - Words sharing a cell agree on its letter.
//! - No cell is left empty.
//! - Words longer than both dimensions always fail, never panic.

use proptest::prelude::*;
use std::collections::HashMap;
use wordsearch_core::{
    Direction, FailureReason, Position, PuzzleBuilder, PuzzleConfig, PuzzleError, ScriptedRng, SeededRng,
};

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,7}", 0..12)
}

#[test]
fn crossing_words_share_their_letter() {
    // "cat" along row 0 going East, "tiger" down column 3 from row 0
    let builder = PuzzleBuilder::new(PuzzleConfig::square(5));
    let mut rng = ScriptedRng::new(vec![2, 0, 1, 4, 0, 3]);
    let puzzle = builder.build(&["cat", "tiger"], &mut rng).unwrap();

    assert!(puzzle.is_complete());
    assert_eq!(puzzle.grid().letter_at(Position::new(0, 3)), Ok(Some('t')));
    assert_eq!(
        puzzle
            .grid()
            .read_path(Position::new(0, 1), Direction::East, 3)
            .as_deref(),
        Some("cat")
    );
    assert_eq!(
        puzzle
            .grid()
            .read_path(Position::new(0, 3), Direction::South, 5)
            .as_deref(),
        Some("tiger")
    );
    assert!(puzzle.verify());
}

#[test]
fn tiger_is_too_long_for_four_by_four() {
    let builder = PuzzleBuilder::new(PuzzleConfig::square(4));
    let puzzle = builder.generate(&["cat", "tiger"]).unwrap();

    assert_eq!(puzzle.placed_count(), 1);
    assert_eq!(puzzle.unplaced()[0].word, "tiger");
    assert_eq!(puzzle.unplaced()[0].reason, FailureReason::TooLong);
    assert!(puzzle.verify());
}

#[test]
fn predefined_lists_fill_a_fifteen_square() {
    let words = [
        "smoke", "hatch", "tiger", "chair", "pound", "stoic", "canoe", "under", "oasis", "album",
    ];
    let puzzle = PuzzleBuilder::new(PuzzleConfig::square(15))
        .generate(&words)
        .unwrap();
    assert!(puzzle.verify());
    assert_eq!(puzzle.word_count(), words.len());
}

#[test]
fn empty_word_aborts_before_any_draw() {
    let builder = PuzzleBuilder::new(PuzzleConfig::square(5));
    let mut rng = ScriptedRng::new(vec![0]);
    let err = builder.build(&["cat", "", "dog"], &mut rng).unwrap_err();
    assert_eq!(err, PuzzleError::EmptyWordRejected { index: 1 });
    assert_eq!(rng.draws(), 0);
}

proptest! {
    #[test]
    fn same_seed_rebuilds_identically(
        seed in any::<u64>(),
        rows in 1usize..12,
        cols in 1usize..12,
        words in word_list(),
    ) {
        let builder = PuzzleBuilder::new(PuzzleConfig::default().with_size(rows, cols));
        let a = builder.build(&words, &mut SeededRng::new(seed)).unwrap();
        let b = builder.build(&words, &mut SeededRng::new(seed)).unwrap();

        prop_assert_eq!(a.grid().to_rows(), b.grid().to_rows());
        prop_assert_eq!(a.unplaced_words(), b.unplaced_words());
    }

    #[test]
    fn placements_read_back_and_agree(
        seed in any::<u64>(),
        size in 3usize..12,
        words in word_list(),
        budget in 1usize..6,
    ) {
        let config = PuzzleConfig::square(size).with_retry_budget(budget);
        let puzzle = PuzzleBuilder::new(config)
            .build(&words, &mut SeededRng::new(seed))
            .unwrap();

        prop_assert!(puzzle.grid().is_full());
        prop_assert_eq!(puzzle.word_count(), words.len());

        let mut claimed: HashMap<Position, char> = HashMap::new();
        for p in puzzle.placements() {
            let read = puzzle.grid().read_path(p.start, p.direction, p.word.len());
            prop_assert_eq!(read.as_deref(), Some(p.word.as_str()));
            for (pos, ch) in p.cells() {
                let prev = *claimed.entry(pos).or_insert(ch);
                prop_assert_eq!(prev, ch);
            }
        }
        prop_assert!(puzzle.verify());
    }

    #[test]
    fn oversized_words_always_fail(
        seed in any::<u64>(),
        rows in 1usize..6,
        cols in 1usize..6,
        budget in 1usize..50,
    ) {
        let word = "a".repeat(rows.max(cols) + 1);
        let config = PuzzleConfig::default()
            .with_size(rows, cols)
            .with_retry_budget(budget);
        let puzzle = PuzzleBuilder::new(config)
            .build(&[word.clone()], &mut SeededRng::new(seed))
            .unwrap();

        prop_assert_eq!(puzzle.unplaced_words(), vec![word.as_str()]);
        prop_assert!(puzzle.grid().is_full());
    }
}
