//! Word lists for Boggle judging
//!
//! Provides the shared [`Dictionary`] handle, a file loader and an embedded
//! starter list compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{STARTER, STARTER_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_count_matches_const() {
        assert_eq!(STARTER.len(), STARTER_COUNT);
    }

    #[test]
    fn starter_words_are_uppercase_letters() {
        for &word in STARTER {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn starter_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = STARTER.iter().collect();
        assert_eq!(unique.len(), STARTER.len());
        assert_eq!(Dictionary::starter().len(), STARTER_COUNT);
    }
}
