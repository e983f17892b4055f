//! Word representation and the labelling algorithm
//!
//! A Word is an ordered, fixed-length run of tiles. Labelling a guess against
//! the mystery word marks each guess tile:
//! - Correct: same content at the same index
//! - Used: content appears somewhere in the mystery word
//! - Unused: content absent, or the tile sits past the end of the mystery word
//!
//! The "somewhere" check always scans the whole mystery word. It does not
//! consume mystery letters, so a guess with two E's gets both marked against a
//! mystery with a single E.

use super::tile::{Label, Tile};
use super::{GameError, Letter};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Ordered sequence of tiles, [`Letter`]s by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<T = Letter> {
    tiles: Vec<T>,
}

impl<T: Tile> Word<T> {
    /// Build a word from tiles, preserving their order
    ///
    /// # Examples
    /// ```
    /// use wordll::core::{Letter, Word};
    ///
    /// let word = Word::new(Letter::from_str_batch("cat"));
    /// assert_eq!(word.len(), 3);
    /// assert_eq!(word.text(), "cat");
    /// ```
    #[must_use]
    pub fn new(tiles: impl IntoIterator<Item = T>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.tiles.iter()
    }

    /// Labels of every tile, in order
    #[must_use]
    pub fn labels(&self) -> Vec<Label> {
        self.tiles.iter().map(Tile::label).collect()
    }

    /// Concatenated tile content without decorators
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map(|tile| tile.content()).collect()
    }

    /// Check whether any tile of this word matches `tile`
    ///
    /// Goes through [`Tile::compare_and_link`] and stops at the first match,
    /// so tiles compared before the match may pick up family links.
    pub fn contains_value(&mut self, tile: &mut T) -> bool {
        self.tiles.iter_mut().any(|own| own.compare_and_link(tile))
    }

    /// Label this word against `mystery` and report whether they are equal
    ///
    /// Only this word's labels change. `mystery` is borrowed mutably because
    /// comparisons may link family tiles on both sides. Calling this again
    /// relabels from scratch.
    ///
    /// Length mismatches are not errors: guess tiles past the end of the
    /// mystery word are Unused and the result is `false`.
    ///
    /// # Examples
    /// ```
    /// use wordll::core::{Label, Letter, Word};
    ///
    /// let mut mystery = Word::new(Letter::from_str_batch("raise"));
    /// let mut guess = Word::new(Letter::from_str_batch("arise"));
    ///
    /// assert!(!guess.label_against(&mut mystery));
    /// assert_eq!(
    ///     guess.labels(),
    ///     [Label::Used, Label::Used, Label::Correct, Label::Correct, Label::Correct]
    /// );
    /// ```
    pub fn label_against(&mut self, mystery: &mut Self) -> bool {
        let same_length = self.tiles.len() == mystery.tiles.len();
        let paired = self.tiles.len().min(mystery.tiles.len());
        let (overlap, overflow) = self.tiles.split_at_mut(paired);
        let mut equal = true;

        for (index, tile) in overlap.iter_mut().enumerate() {
            if tile.compare_and_link(&mut mystery.tiles[index]) {
                tile.mark_correct();
            } else {
                if mystery.contains_value(tile) {
                    tile.mark_used();
                } else {
                    tile.mark_unused();
                }
                equal = false;
            }
            trace!(index, label = ?tile.label(), "labelled tile");
        }

        for tile in overflow {
            tile.mark_unused();
            equal = false;
        }

        equal && same_length
    }
}

impl<T> From<Vec<T>> for Word<T> {
    fn from(tiles: Vec<T>) -> Self {
        Self { tiles }
    }
}

impl<'a, T> IntoIterator for &'a Word<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Parse raw input into a word of letters
///
/// Surrounding whitespace is trimmed; an empty result is rejected.
impl FromStr for Word<Letter> {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(GameError::EmptyWord);
        }
        Ok(Self::new(Letter::from_str_batch(text)))
    }
}

impl<T: fmt::Display> fmt::Display for Word<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Word: ")?;
        for tile in &self.tiles {
            write!(f, "{tile} ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExtendedLetter;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use crate::core::Label::{Correct, Unused, Used};

    fn word(text: &str) -> Word {
        Word::new(Letter::from_str_batch(text))
    }

    fn label(guess: &str, mystery: &str) -> (bool, Vec<Label>) {
        let mut guess = word(guess);
        let equal = guess.label_against(&mut word(mystery));
        (equal, guess.labels())
    }

    #[test]
    fn exact_match_is_all_correct() {
        let (equal, labels) = label("raise", "raise");
        assert!(equal);
        assert_eq!(labels, vec![Correct; 5]);
    }

    #[test]
    fn anagram_marks_misplaced_letters_used() {
        let (equal, labels) = label("arise", "raise");
        assert!(!equal);
        assert_eq!(labels, vec![Used, Used, Correct, Correct, Correct]);
    }

    #[test]
    fn longer_guess_marks_overflow_unused() {
        let (equal, labels) = label("cats", "cat");
        assert!(!equal);
        assert_eq!(labels, vec![Correct, Correct, Correct, Unused]);
    }

    #[test]
    fn overflow_is_unused_even_if_letter_is_in_mystery() {
        let (equal, labels) = label("catc", "cat");
        assert!(!equal);
        assert_eq!(labels, vec![Correct, Correct, Correct, Unused]);
    }

    #[test]
    fn shorter_guess_is_never_equal() {
        let (equal, labels) = label("cat", "cats");
        assert!(!equal);
        assert_eq!(labels, vec![Correct, Correct, Correct]);
    }

    #[rstest]
    #[case::absent("xyz", "abc", vec![Unused, Unused, Unused])]
    #[case::mixed("crane", "slate", vec![Unused, Unused, Correct, Unused, Correct])]
    #[case::rotated("tca", "cat", vec![Used, Used, Used])]
    #[case::case_sensitive("CAT", "cat", vec![Unused, Unused, Unused])]
    fn labels_follow_position_then_presence(
        #[case] guess: &str,
        #[case] mystery: &str,
        #[case] expected: Vec<Label>,
    ) {
        let (equal, labels) = label(guess, mystery);
        assert!(!equal);
        assert_eq!(labels, expected);
    }

    // Deviation from standard Wordle: mystery letters are not consumed, so
    // every repeat of a present letter is marked Used.
    #[test]
    fn duplicate_guess_letters_all_marked_used() {
        let (_, labels) = label("eerie", "theme");
        assert_eq!(labels, vec![Used, Used, Unused, Unused, Correct]);

        let (_, labels) = label("speed", "abide");
        assert_eq!(labels, vec![Unused, Unused, Used, Used, Used]);
    }

    #[test]
    fn empty_words() {
        assert_eq!(label("", ""), (true, vec![]));
        assert_eq!(label("", "cat"), (false, vec![]));

        let (equal, labels) = label("ab", "");
        assert!(!equal);
        assert_eq!(labels, vec![Unused, Unused]);
    }

    #[test]
    fn relabelling_overwrites_previous_labels() {
        let mut guess = word("arise");
        guess.label_against(&mut word("raise"));
        assert!(guess.label_against(&mut word("arise")));
        assert_eq!(guess.labels(), vec![Correct; 5]);
    }

    #[test]
    fn mystery_labels_are_untouched() {
        let mut mystery = word("raise");
        word("arise").label_against(&mut mystery);
        assert!(mystery.iter().all(|l| l.label() == Label::Unset));
    }

    #[test]
    fn contains_value_matches_anywhere() {
        let mut w = word("raise");
        assert!(w.contains_value(&mut Letter::new('s')));
        assert!(!w.contains_value(&mut Letter::new('z')));
    }

    #[test]
    fn display_renders_every_tile_followed_by_space() {
        let mut guess = word("arise");
        assert_eq!(guess.to_string(), "Word:  a   r   i   s   e  ");

        guess.label_against(&mut word("raise"));
        assert_eq!(guess.to_string(), "Word: +a+ +r+ !i! !s! !e! ");

        assert_eq!(word("").to_string(), "Word: ");
    }

    #[test]
    fn from_str_trims_and_rejects_empty() {
        let parsed: Word = "  cat \n".parse().unwrap();
        assert_eq!(parsed.text(), "cat");
        assert!(matches!("   ".parse::<Word>(), Err(GameError::EmptyWord)));
    }

    #[test]
    fn extended_labelling_links_families_during_scan() {
        let mut mystery = Word::new(
            ExtendedLetter::from_strings(&["ka", "ta", "na"], Some(&[1, 2, 3][..])).unwrap(),
        );
        let mut guess = Word::new(
            ExtendedLetter::from_strings(&["ki", "ta", "mu"], Some(&[1, 2, 4][..])).unwrap(),
        );

        assert!(!guess.label_against(&mut mystery));
        assert_eq!(guess.labels(), vec![Unused, Correct, Unused]);

        // "ki" met "ka" of the same family; "mu" has no sibling in play
        assert_eq!(guess.to_string(), "Word: .ki. !ta! -mu- ");
        assert!(mystery.tiles()[0].is_related());
        assert!(!mystery.tiles()[2].is_related());
    }

    #[test]
    fn extended_singletons_render_with_decorators() {
        let mut mystery = Word::new(ExtendedLetter::from_strings(&["a", "b"], None).unwrap());
        let mut guess = Word::new(ExtendedLetter::from_strings(&["b", "c"], None).unwrap());

        guess.label_against(&mut mystery);
        assert_eq!(guess.to_string(), "Word: +b+ -c- ");
        assert!(guess.iter().all(|t| !t.is_related()));
        assert!(mystery.iter().all(|t| !t.is_related()));
    }
}
