//! Guess history for one mystery word
//!
//! Guesses are kept in a `Vec` in submission order and read back in reverse,
//! which gives most-recent-first traversal with O(1) amortised insertion.

use super::tile::Tile;
use super::{Letter, Word};
use std::fmt;
use tracing::debug;

/// Log of every guess submitted against a fixed mystery word
#[derive(Debug, Clone)]
pub struct GuessHistory<T = Letter> {
    mystery: Word<T>,
    guesses: Vec<Word<T>>,
}

impl<T: Tile> GuessHistory<T> {
    /// Start an empty history for `mystery`
    #[must_use]
    pub const fn new(mystery: Word<T>) -> Self {
        Self {
            mystery,
            guesses: Vec::new(),
        }
    }

    /// Record `guess`, label it against the mystery word, and report a win
    ///
    /// Returns `true` when the guess equals the mystery word.
    ///
    /// # Examples
    /// ```
    /// use wordll::core::{GuessHistory, Word};
    ///
    /// let mut history = GuessHistory::new("raise".parse::<Word>().unwrap());
    /// assert!(!history.submit_guess("arise".parse().unwrap()));
    /// assert!(history.submit_guess("raise".parse().unwrap()));
    /// assert_eq!(history.len(), 2);
    /// ```
    pub fn submit_guess(&mut self, mut guess: Word<T>) -> bool {
        let solved = guess.label_against(&mut self.mystery);
        debug!(
            attempt = self.guesses.len() + 1,
            guess = %guess.text(),
            solved,
            "guess submitted"
        );
        self.guesses.push(guess);
        solved
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub const fn mystery(&self) -> &Word<T> {
        &self.mystery
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Most recent guess, if any
    #[must_use]
    pub fn latest(&self) -> Option<&Word<T>> {
        self.guesses.last()
    }

    /// Submitted guesses, most recent first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Word<T>> + DoubleEndedIterator {
        self.guesses.iter().rev()
    }
}

impl<T: fmt::Display> fmt::Display for GuessHistory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for guess in self.guesses.iter().rev() {
            writeln!(f, "{guess}")?;
        }
        Ok(())
    }
}
