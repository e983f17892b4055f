//! Error type for building words at the input boundary
//!
//! Labelling itself never fails; these errors only come from turning raw
//! input into tiles.

use std::io;
use thiserror::Error;

/// Error returned when raw input cannot become a word or a game cannot run
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word must contain at least one letter")]
    EmptyWord,

    #[error("got {codes} family codes for {contents} tiles")]
    FamilyCodeCount { contents: usize, codes: usize },

    #[error("invalid family code '{0}', expected an integer")]
    InvalidFamilyCode(String),

    #[error("tile '{0}' has no content")]
    EmptyTile(String),

    #[error("either every tile carries a family code or none does")]
    MixedFamilyTags,

    #[error("no mystery words available")]
    NoMystery,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
