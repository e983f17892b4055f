//! wordll
//!
//! Wordle-style letter labelling: compare guesses against a mystery word,
//! mark every tile Correct, Used or Unused, and keep a newest-first history.
//!
//! # Quick Start
//!
//! ```rust
//! use wordll::core::{GuessHistory, Word};
//!
//! let mystery: Word = "raise".parse().unwrap();
//! let mut history = GuessHistory::new(mystery);
//!
//! let solved = history.submit_guess("arise".parse().unwrap());
//! assert!(!solved);
//! assert_eq!(history.to_string(), "Word: +a+ +r+ !i! !s! !e! \n");
//! ```

// Core domain types
pub mod core;

// Mystery word list
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
