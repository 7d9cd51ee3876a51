//! Word scoring
//!
//! Fixed Boggle table:
//!
//! | Letters | Points |
//! |---------|--------|
//! | < 3     | 0      |
//! | 3-4     | 1      |
//! | 5       | 2      |
//! | 6       | 3      |
//! | 7       | 4      |
//! | n ≥ 5   | n - 3  |

use std::fmt;

/// Points for a single word
///
/// # Examples
/// ```
/// use boggle_judge::scoring::score;
///
/// assert_eq!(score("AT"), 0);
/// assert_eq!(score("FANG"), 1);
/// assert_eq!(score("CRANE"), 2);
/// assert_eq!(score("RAFTER"), 3);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    points_for_length(word.chars().count())
}

/// Table lookup by letter count; counts beyond `u32::MAX` saturate
fn points_for_length(len: usize) -> u32 {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    match len {
        0..=2 => 0,
        3 | 4 => 1,
        _ => (len - 5) + 2,
    }
}

/// Sum of [`score`] over a set of accepted words
pub fn total_score<I, S>(words: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|word| score(word.as_ref())).sum()
}

/// A word paired with its points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let score = score(&word);
        Self { word, score }
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.score)
    }
}

/// Scores for every accepted word of a round, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    pub words: Vec<ScoredWord>,
    pub total: u32,
}

impl ScoreSheet {
    /// Score each word and sum the total
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<ScoredWord> = words.into_iter().map(ScoredWord::new).collect();
        let total = words.iter().map(|scored| scored.score).sum();
        Self { words, total }
    }
}
