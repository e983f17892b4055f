//! Multi-character tiles grouped into families
//!
//! An [`ExtendedLetter`] holds arbitrary text (a syllable, a digraph, an
//! emoji sequence) and an optional family id. Tiles of the same family become
//! *related* as soon as the labelling pass compares them, whether or not their
//! content matches. A related tile that ends up unused renders with dots so
//! the player can see that a sibling of it was in play.

use super::GameError;
use super::tile::{Label, Tile, write_decorated};
use std::borrow::Cow;
use std::fmt;

/// Tile with free-form content and an optional family
#[derive(Debug, Clone)]
pub struct ExtendedLetter {
    content: String,
    family: Option<i32>,
    related: bool,
    position: usize,
    label: Label,
}

impl ExtendedLetter {
    /// Create a tile that belongs to no family
    ///
    /// # Examples
    /// ```
    /// use wordll::core::ExtendedLetter;
    ///
    /// let tile = ExtendedLetter::new("ch");
    /// assert_eq!(tile.family(), None);
    /// assert!(!tile.is_related());
    /// ```
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            family: None,
            related: false,
            position: 0,
            label: Label::Unset,
        }
    }

    /// Create a tile tagged with `family`
    #[must_use]
    pub fn with_family(content: impl Into<String>, family: i32) -> Self {
        Self {
            family: Some(family),
            ..Self::new(content)
        }
    }

    /// Build one tile per content string
    ///
    /// Without `codes` every tile is a singleton; otherwise `contents[i]` is
    /// paired with `codes[i]`. Positions are assigned left to right.
    ///
    /// # Errors
    /// Returns [`GameError::FamilyCodeCount`] if `codes` is given and its
    /// length differs from `contents`.
    ///
    /// # Examples
    /// ```
    /// use wordll::core::ExtendedLetter;
    ///
    /// let tiles = ExtendedLetter::from_strings(&["ka", "ki"], Some(&[7, 7][..])).unwrap();
    /// assert_eq!(tiles[1].family(), Some(7));
    /// assert_eq!(tiles[1].position(), 1);
    ///
    /// assert!(ExtendedLetter::from_strings(&["ka", "ki"], Some(&[7][..])).is_err());
    /// ```
    pub fn from_strings<S: AsRef<str>>(
        contents: &[S],
        codes: Option<&[i32]>,
    ) -> Result<Vec<Self>, GameError> {
        if let Some(codes) = codes
            && codes.len() != contents.len()
        {
            return Err(GameError::FamilyCodeCount {
                contents: contents.len(),
                codes: codes.len(),
            });
        }

        let tiles = contents
            .iter()
            .enumerate()
            .map(|(position, content)| {
                let content = content.as_ref();
                let tile = match codes {
                    Some(codes) => Self::with_family(content, codes[position]),
                    None => Self::new(content),
                };
                Self { position, ..tile }
            })
            .collect();

        Ok(tiles)
    }

    /// Text held by this tile
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Family id, `None` for singletons
    #[inline]
    #[must_use]
    pub const fn family(&self) -> Option<i32> {
        self.family
    }

    /// Whether a comparison has linked this tile to a family sibling
    ///
    /// Once set, this never goes back to `false`.
    #[inline]
    #[must_use]
    pub const fn is_related(&self) -> bool {
        self.related
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Link both tiles if they share a family; singletons never link
    fn link_family(&mut self, other: &mut Self) {
        if let (Some(mine), Some(theirs)) = (self.family, other.family)
            && mine == theirs
        {
            self.related = true;
            other.related = true;
        }
    }
}

/// Content equality only; never touches the related flag
impl PartialEq for ExtendedLetter {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for ExtendedLetter {}

impl Tile for ExtendedLetter {
    #[inline]
    fn label(&self) -> Label {
        self.label
    }

    #[inline]
    fn set_label(&mut self, label: Label) {
        self.label = label;
    }

    fn content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.content)
    }

    fn compare_and_link(&mut self, other: &mut Self) -> bool {
        self.link_family(other);
        *self == *other
    }
}

impl fmt::Display for ExtendedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unused() && self.related {
            write!(f, ".{}.", self.content)
        } else {
            write_decorated(f, self.label, &self.content)
        }
    }
}
