//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckConfig, CheckResult, check_guesses};
pub use play::{PlayConfig, PlayOutcome, run_play};
