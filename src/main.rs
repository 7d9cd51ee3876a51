//! Boggle Judge - CLI
//!
//! Checks a player's words against a board and dictionary, rolls classic
//! boards, and lists the words a player missed.

use anyhow::{Context, Result};
use boggle_judge::{
    classifier::Classifier,
    commands::{CheckConfig, check_words, find_missed, shuffle_board},
    core::Grid,
    matcher::PathMatcher,
    output::{print_board, print_check_result, print_missed_result},
    wordlists::{Dictionary, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boggle_judge",
    about = "Judge Boggle words: dictionary check, adjacency paths and scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'starter' (default, embedded list) or path to a newline-delimited word list
    #[arg(short = 'd', long, global = true, default_value = "starter")]
    dictionary: String,

    /// Use each board cell at most once per word (default allows reuse, matching the classic judge)
    #[arg(long, global = true)]
    strict_paths: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify and score submitted words
    Check {
        /// Board letters in row-major order, e.g. GDIW/NTEM/TAFC/ERIJ
        #[arg(short, long)]
        board: String,

        /// Words to check
        words: Vec<String>,

        /// Read additional words from a file (whitespace separated)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show a path for every accepted word
        #[arg(short, long)]
        paths: bool,
    },

    /// Roll a classic 4x4 board
    Shuffle {
        /// Seed for a reproducible board
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List dictionary words on the board that were not submitted
    Missed {
        /// Board letters in row-major order
        #[arg(short, long)]
        board: String,

        /// Words already found
        words: Vec<String>,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary_mode: &str) -> Result<Dictionary> {
    match dictionary_mode {
        "starter" => Ok(Dictionary::starter()),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn parse_board(board: &str) -> Result<Grid> {
    board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let matcher = PathMatcher::new(!cli.strict_paths);
    debug!(allow_revisit = matcher.allows_revisit(), "Path rule selected");

    match cli.command {
        Commands::Check {
            board,
            words,
            file,
            paths,
        } => {
            let classifier = Classifier::new(load_dictionary(&cli.dictionary)?, matcher);
            run_check_command(&classifier, &board, words, file, paths)
        }
        Commands::Shuffle { seed } => run_shuffle_command(seed),
        Commands::Missed {
            board,
            words,
            quiet,
        } => {
            let classifier = Classifier::new(load_dictionary(&cli.dictionary)?, matcher);
            run_missed_command(&classifier, &board, &words, quiet)
        }
    }
}

fn run_check_command(
    classifier: &Classifier,
    board: &str,
    mut words: Vec<String>,
    file: Option<PathBuf>,
    paths: bool,
) -> Result<()> {
    if let Some(path) = file {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read words from {}", path.display()))?;
        words.extend(content.split_whitespace().map(str::to_string));
    }

    let mut config = CheckConfig::new(parse_board(board)?, words);
    config.show_paths = paths;

    let result = check_words(config, classifier)?;
    print_check_result(&result);
    Ok(())
}

fn run_shuffle_command(seed: Option<u64>) -> Result<()> {
    let grid = shuffle_board(seed)?;
    print_board(&grid);
    Ok(())
}

fn run_missed_command(
    classifier: &Classifier,
    board: &str,
    words: &[String],
    quiet: bool,
) -> Result<()> {
    let grid = parse_board(board)?;
    let result = find_missed(classifier, &grid, words, !quiet);
    print_missed_result(&result);
    Ok(())
}
