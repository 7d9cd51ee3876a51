//! Command implementations

pub mod check;
pub mod missed;
pub mod shuffle;

pub use check::{CheckConfig, CheckResult, check_words, normalize_submissions};
pub use missed::{MissedResult, find_missed};
pub use shuffle::shuffle_board;
