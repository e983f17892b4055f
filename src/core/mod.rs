//! Core domain types for the guessing game
//!
//! This module contains the labelling algorithm and the guess history.
//! Nothing here performs I/O; rendering is exposed through `Display` so a
//! presentation layer can print the exact text forms.

mod error;
mod extended;
mod history;
mod letter;
mod tile;
mod tiles;
mod word;

pub use error::GameError;
pub use extended::ExtendedLetter;
pub use history::GuessHistory;
pub use letter::Letter;
pub use tile::{Label, Tile};
pub use tiles::{TileInput, parse_tiles};
pub use word::Word;
