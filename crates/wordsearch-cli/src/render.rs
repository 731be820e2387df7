use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use wordsearch_core::Puzzle;

/// Output format for the finished puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Text rendering colors
pub struct Palette {
    pub letters: Color,
    pub summary: Color,
    pub warning: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            letters: Color::White,
            summary: Color::Green,
            warning: Color::Yellow,
        }
    }
}

pub fn render<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    format: OutputFormat,
    color: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, puzzle, color.then(Palette::default).as_ref()),
        OutputFormat::Json => render_json(out, puzzle),
    }
}

/// Grid rows, the placed count, then one warning per unplaced word
pub fn render_text<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    palette: Option<&Palette>,
) -> io::Result<()> {
    for line in puzzle.grid().to_rows() {
        let spaced: Vec<String> = line.chars().map(|c| c.to_string()).collect();
        write_colored(out, palette.map(|p| p.letters), &spaced.join(" "))?;
    }
    writeln!(out)?;

    let summary = puzzle.summary();
    write_colored(out, palette.map(|p| p.summary), &summary)?;

    for unplaced in puzzle.unplaced() {
        let line = format!(
            "warning: could not place {:?} ({})",
            unplaced.word, unplaced.reason
        );
        write_colored(out, palette.map(|p| p.warning), &line)?;
    }

    if let Some(seed) = puzzle.seed() {
        writeln!(out, "seed: {}", seed)?;
    }

    out.flush()
}

pub fn render_json<W: Write>(out: &mut W, puzzle: &Puzzle) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, puzzle).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()
}

fn write_colored<W: Write>(out: &mut W, color: Option<Color>, text: &str) -> io::Result<()> {
    match color {
        Some(color) => queue!(
            out,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        ),
        None => writeln!(out, "{}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::{PuzzleBuilder, PuzzleConfig};

    fn puzzle(words: &[&str], size: usize) -> Puzzle {
        PuzzleBuilder::new(PuzzleConfig::square(size))
            .generate(words)
            .unwrap()
    }

    #[test]
    fn test_plain_text_layout() {
        let puzzle = puzzle(&["cat", "elephant"], 4);
        let mut out = Vec::new();
        render_text(&mut out, &puzzle, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4 + 1 + 1 + 1 + 1);
        for line in &lines[..4] {
            assert_eq!(line.len(), 7);
            assert!(line
                .split(' ')
                .all(|c| c.len() == 1 && c.chars().all(|ch| ch.is_ascii_lowercase())));
        }
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "1 of 2 words placed");
        assert!(lines[6].starts_with("warning: could not place \"elephant\""));
        assert_eq!(lines[7], "seed: 10");
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_text_has_escapes() {
        let puzzle = puzzle(&["cat"], 5);
        let mut out = Vec::new();
        render(&mut out, &puzzle, OutputFormat::Text, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("1 of 1 words placed"));
    }

    #[test]
    fn test_json_roundtrips() {
        let puzzle = puzzle(&["cat", "dog"], 5);
        let mut out = Vec::new();
        render(&mut out, &puzzle, OutputFormat::Json, true).unwrap();
        let back: Puzzle = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, puzzle);
    }
}
