//! Label state and the tile abstraction shared by every letter kind
//!
//! A tile is one cell of a [`Word`](super::Word). It carries a [`Label`]
//! that the labelling pass overwrites in place.

use std::borrow::Cow;
use std::fmt;

/// Feedback state of a single tile
///
/// Every state is reachable from every other; a tile is simply relabelled on
/// the next labelling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Not labelled yet
    #[default]
    Unset,
    /// Absent from the mystery word
    Unused,
    /// Present in the mystery word at another position
    Used,
    /// Present at this exact position
    Correct,
}

impl Label {
    /// Marker placed on both sides of a rendered tile
    ///
    /// # Examples
    /// ```
    /// use wordll::core::Label;
    ///
    /// assert_eq!(Label::Correct.decorator(), '!');
    /// assert_eq!(Label::Unset.decorator(), ' ');
    /// ```
    #[inline]
    #[must_use]
    pub const fn decorator(self) -> char {
        match self {
            Self::Unused => '-',
            Self::Used => '+',
            Self::Correct => '!',
            Self::Unset => ' ',
        }
    }
}

/// A cell that can be placed in a [`Word`](super::Word) and labelled
///
/// `PartialEq` on a tile is pure content equality. Labelling goes through
/// [`Tile::compare_and_link`] instead, which may record extra state on both
/// tiles while comparing.
pub trait Tile: PartialEq + fmt::Display {
    /// Current label
    fn label(&self) -> Label;

    /// Overwrite the label
    fn set_label(&mut self, label: Label);

    /// Textual content without decorators
    fn content(&self) -> Cow<'_, str>;

    /// Compare two tiles during labelling
    ///
    /// Returns content equality. Implementations may update both tiles as a
    /// side effect; the default has none.
    fn compare_and_link(&mut self, other: &mut Self) -> bool {
        *self == *other
    }

    fn mark_unused(&mut self) {
        self.set_label(Label::Unused);
    }

    fn mark_used(&mut self) {
        self.set_label(Label::Used);
    }

    fn mark_correct(&mut self) {
        self.set_label(Label::Correct);
    }

    fn is_unused(&self) -> bool {
        self.label() == Label::Unused
    }
}

/// Write `content` wrapped in the label's decorator on both sides
pub(crate) fn write_decorated(
    f: &mut fmt::Formatter<'_>,
    label: Label,
    content: &str,
) -> fmt::Result {
    let marker = label.decorator();
    write!(f, "{marker}{content}{marker}")
}
