//! Parsing multi-character tile input
//!
//! Tile words are written as tokens separated by whitespace or commas. A
//! token may carry a family after its last colon. Either every token has one
//! (`"ka:1 ki:1 n:2"`) or none does (`"ka ki n"`).

use super::{ExtendedLetter, GameError, Word};

/// Contents and optional family codes read from tile input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileInput {
    pub contents: Vec<String>,
    pub families: Option<Vec<i32>>,
}

impl TileInput {
    /// Build the tiles described by this input
    ///
    /// # Errors
    /// Returns [`GameError::FamilyCodeCount`] if the family list was edited to
    /// a different length than the contents.
    pub fn into_tiles(self) -> Result<Vec<ExtendedLetter>, GameError> {
        ExtendedLetter::from_strings(self.contents.as_slice(), self.families.as_deref())
    }

    /// Build a word from this input
    ///
    /// # Errors
    /// Same as [`TileInput::into_tiles`].
    pub fn into_word(self) -> Result<Word<ExtendedLetter>, GameError> {
        self.into_tiles().map(Word::new)
    }
}

/// Parse tile tokens such as `"sa:1, shi:1, ku:2"`
///
/// # Errors
/// - [`GameError::EmptyWord`] if there are no tokens
/// - [`GameError::EmptyTile`] if a token has a family but no content
/// - [`GameError::InvalidFamilyCode`] if a family is not an integer
/// - [`GameError::MixedFamilyTags`] if only some tokens carry a family
///
/// # Examples
/// ```
/// use wordll::core::parse_tiles;
///
/// let parsed = parse_tiles("sa:1, shi:1 ku:2").unwrap();
/// assert_eq!(parsed.contents, ["sa", "shi", "ku"]);
/// assert_eq!(parsed.families, Some(vec![1, 1, 2]));
///
/// let plain = parse_tiles("ch a").unwrap();
/// assert_eq!(plain.families, None);
/// ```
pub fn parse_tiles(input: &str) -> Result<TileInput, GameError> {
    let mut contents = Vec::new();
    let mut families = Vec::new();

    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
    {
        match token.rsplit_once(':') {
            Some((content, code)) => {
                if content.is_empty() {
                    return Err(GameError::EmptyTile(token.to_string()));
                }
                let family = code
                    .parse::<i32>()
                    .map_err(|_| GameError::InvalidFamilyCode(code.to_string()))?;
                contents.push(content.to_string());
                families.push(family);
            }
            None => contents.push(token.to_string()),
        }
    }

    if contents.is_empty() {
        return Err(GameError::EmptyWord);
    }

    let families = match families.len() {
        0 => None,
        n if n == contents.len() => Some(families),
        _ => return Err(GameError::MixedFamilyTags),
    };

    Ok(TileInput { contents, families })
}
