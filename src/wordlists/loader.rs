//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a newline-delimited file.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Load a dictionary from a file with one word per line
///
/// Blank lines and entries that are not a single run of letters are skipped;
/// accepted entries are uppercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_judge::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("sowpods.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path.as_ref())?;
    let dictionary = parse_word_list(&content);
    info!(words = dictionary.len(), "Loaded dictionary");
    Ok(dictionary)
}

/// Parse newline-delimited word list text
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    Dictionary::from_words(content.lines().filter(|line| !line.trim().is_empty()))
}
