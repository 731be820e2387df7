//! Basic example of using the word-search engine

use wordsearch_core::{prepare_word_list, PuzzleBuilder, PuzzleConfig, SeededRng};

fn main() {
    // Clean up raw input the way a front end would
    let words = prepare_word_list(["Smoke", "hatch!", "Tiger", "chair", "tiger", "Album 2"]);
    println!("Words: {}\n", words.join(", "));

    // Generate a reproducible puzzle
    let builder = PuzzleBuilder::new(PuzzleConfig::square(8).with_seed(10));
    let puzzle = match builder.generate(&words) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("{}", puzzle);
    println!("{}", puzzle.summary());
    for unplaced in puzzle.unplaced() {
        println!("Could not place {:?}: {}", unplaced.word, unplaced.reason);
    }

    // Where each word went
    println!("\nPlacements:");
    for placement in puzzle.placements() {
        println!(
            "  {:<8} row {} col {} going {}",
            placement.word, placement.start.row, placement.start.col, placement.direction
        );
    }

    // Same seed, same puzzle
    let again = builder
        .build(&words, &mut SeededRng::new(10))
        .map(|p| p.grid().clone());
    println!("\nReproducible: {}", again.as_ref() == Ok(puzzle.grid()));

    // A word too long for the grid is reported, not fatal
    let tiny = PuzzleBuilder::new(PuzzleConfig::square(3));
    if let Ok(p) = tiny.generate(&["elephant"]) {
        println!("\n{}{}", p, p.summary());
    }
}
