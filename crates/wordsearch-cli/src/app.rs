use crate::lists;
use crate::render::{self, OutputFormat};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use wordsearch_core::{prepare_word_list, Puzzle, PuzzleBuilder, PuzzleConfig, PuzzleError};

/// Generate a word-search puzzle
#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about)]
pub struct Cli {
    /// Words or phrases to hide (lowercased, non-letters removed)
    pub words: Vec<String>,

    /// Use a built-in word list (1-4)
    #[arg(short, long, value_name = "N")]
    pub list: Option<usize>,

    /// Read words from a file, one word or phrase per line
    #[arg(short = 'f', long, value_name = "PATH")]
    pub words_file: Option<PathBuf>,

    /// Grid rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Square grid size (sets rows and columns)
    #[arg(short, long, conflicts_with_all = ["rows", "cols"])]
    pub size: Option<usize>,

    /// Conflicting attempts allowed per word
    #[arg(short, long, value_name = "N")]
    pub retries: Option<usize>,

    /// Random seed; the same seed always gives the same puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pick a fresh random seed
    #[arg(long, conflicts_with = "seed")]
    pub random_seed: bool,

    /// JSON file with generation settings; flags take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Errors surfaced to the user
#[derive(Debug)]
pub enum AppError {
    /// Config file could not be read or parsed
    Config(String),
    /// Words file could not be read
    WordsFile(String),
    /// No built-in list with that number
    UnknownList(usize),
    /// Puzzle construction failed
    Puzzle(PuzzleError),
    /// Writing output failed
    Output(io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::WordsFile(e) => write!(f, "Words file error: {}", e),
            Self::UnknownList(n) => write!(
                f,
                "No built-in word list {} (choose 1-{})",
                n,
                lists::count()
            ),
            Self::Puzzle(e) => write!(f, "{}", e),
            Self::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PuzzleError> for AppError {
    fn from(e: PuzzleError) -> Self {
        Self::Puzzle(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

/// Defaults, then the config file, then flags
pub fn resolve_config(cli: &Cli) -> Result<PuzzleConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PuzzleConfig::default(),
    };

    if let Some(size) = cli.size {
        config.rows = size;
        config.cols = size;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(retries) = cli.retries {
        config.retry_budget = retries;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    } else if cli.random_seed {
        config.seed = wordsearch_core::random::entropy_seed();
    }

    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<PuzzleConfig, AppError> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&json).map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
}

/// Built-in list, then the words file, then positional words, sanitized
pub fn collect_words(cli: &Cli) -> Result<Vec<String>, AppError> {
    let mut raw: Vec<String> = Vec::new();

    if let Some(n) = cli.list {
        let list = lists::get(n).ok_or(AppError::UnknownList(n))?;
        raw.extend(list.iter().map(|w| w.to_string()));
    }

    if let Some(path) = &cli.words_file {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::WordsFile(format!("{}: {}", path.display(), e)))?;
        raw.extend(text.lines().map(str::to_string));
    }

    raw.extend(cli.words.iter().cloned());

    let words = prepare_word_list(&raw);
    if words.len() < raw.len() {
        log::info!(
            "kept {} of {} entries after sanitizing",
            words.len(),
            raw.len()
        );
    }
    Ok(words)
}

pub fn generate(cli: &Cli) -> Result<Puzzle, AppError> {
    let config = resolve_config(cli)?;
    let words = collect_words(cli)?;
    if words.is_empty() {
        log::warn!("no words given; the grid will be filler only");
    }
    Ok(PuzzleBuilder::new(config).generate(&words)?)
}

pub fn run(cli: &Cli) -> Result<(), AppError> {
    let puzzle = generate(cli)?;

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut out = stdout.lock();
    render::render(&mut out, &puzzle, cli.format, color)?;
    Ok(())
}
