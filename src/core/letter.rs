//! Single-character tile
//!
//! A Letter stores one character, the position it was read from, and the
//! label assigned by the last labelling pass.

use super::tile::{Label, Tile, write_decorated};
use std::borrow::Cow;
use std::fmt;

/// One character of a word with its feedback label
///
/// Two letters are equal when their characters match. Position and label
/// take no part in equality.
#[derive(Debug, Clone)]
pub struct Letter {
    value: char,
    position: usize,
    label: Label,
}

impl Letter {
    /// Create an unlabelled letter at position 0
    ///
    /// # Examples
    /// ```
    /// use wordll::core::{Label, Letter, Tile};
    ///
    /// let letter = Letter::new('r');
    /// assert_eq!(letter.value(), 'r');
    /// assert_eq!(letter.label(), Label::Unset);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: char) -> Self {
        Self {
            value,
            position: 0,
            label: Label::Unset,
        }
    }

    /// Create one letter per character of `text`, positioned left to right
    ///
    /// # Examples
    /// ```
    /// use wordll::core::Letter;
    ///
    /// let letters = Letter::from_str_batch("cat");
    /// assert_eq!(letters.len(), 3);
    /// assert_eq!(letters[2].value(), 't');
    /// assert_eq!(letters[2].position(), 2);
    /// ```
    #[must_use]
    pub fn from_str_batch(text: &str) -> Vec<Self> {
        text.chars()
            .enumerate()
            .map(|(position, value)| Self {
                value,
                position,
                label: Label::Unset,
            })
            .collect()
    }

    /// The character this letter holds
    #[inline]
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }

    /// Index in the source string (0 unless built by [`Letter::from_str_batch`])
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Letter {}

impl Tile for Letter {
    #[inline]
    fn label(&self) -> Label {
        self.label
    }

    #[inline]
    fn set_label(&mut self, label: Label) {
        self.label = label;
    }

    fn content(&self) -> Cow<'_, str> {
        Cow::Owned(self.value.to_string())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        write_decorated(f, self.label, self.value.encode_utf8(&mut buf))
    }
}
