//! Non-interactive labelling command
//!
//! Labels a list of guesses against a mystery word and returns the board.

use crate::core::{GameError, GuessHistory, Label, Tile, TileInput, Word, parse_tiles};

/// Configuration for checking guesses
pub struct CheckConfig {
    pub mystery: String,
    pub guesses: Vec<String>,
    /// Read words as tile tokens instead of single characters
    pub tiles: bool,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(mystery: String, guesses: Vec<String>) -> Self {
        Self {
            mystery,
            guesses,
            tiles: false,
        }
    }

    #[must_use]
    pub const fn with_tiles(mut self, tiles: bool) -> Self {
        self.tiles = tiles;
        self
    }
}

/// Result of checking guesses
pub struct CheckResult {
    pub mystery: String,
    /// Exact history rendering, most recent guess first
    pub board: String,
    /// Rendered tiles and labels per guess, most recent first
    pub rows: Vec<Vec<(String, Label)>>,
    /// 1-based attempt of the first winning guess
    pub solved_at: Option<usize>,
    pub attempts: usize,
}

/// Label every guess in `config` against its mystery word
///
/// # Errors
///
/// Returns an error if the mystery word or any guess is empty, or if tile
/// input is malformed.
pub fn check_guesses(config: &CheckConfig) -> Result<CheckResult, GameError> {
    if config.tiles {
        let mystery = parse_tiles(&config.mystery)?.into_word()?;
        let guesses = config
            .guesses
            .iter()
            .map(|guess| parse_tiles(guess).and_then(TileInput::into_word))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(label_all(mystery, guesses))
    } else {
        let mystery: Word = config.mystery.parse()?;
        let guesses = config
            .guesses
            .iter()
            .map(|guess| guess.parse::<Word>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(label_all(mystery, guesses))
    }
}

fn label_all<T: Tile>(mystery: Word<T>, guesses: Vec<Word<T>>) -> CheckResult {
    let mut history = GuessHistory::new(mystery);
    let mut solved_at = None;

    for guess in guesses {
        if history.submit_guess(guess) && solved_at.is_none() {
            solved_at = Some(history.len());
        }
    }

    let rows = history
        .iter()
        .map(|word| {
            word.iter()
                .map(|tile| (tile.to_string(), tile.label()))
                .collect()
        })
        .collect();

    CheckResult {
        mystery: history.mystery().text(),
        board: history.to_string(),
        rows,
        solved_at,
        attempts: history.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(mystery: &str, guesses: &[&str]) -> CheckConfig {
        CheckConfig::new(
            mystery.to_string(),
            guesses.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn check_renders_board_newest_first() {
        let result = check_guesses(&config("raise", &["arise", "raise"])).unwrap();

        assert_eq!(
            result.board,
            "Word: !r! !a! !i! !s! !e! \nWord: +a+ +r+ !i! !s! !e! \n"
        );
        assert_eq!(result.solved_at, Some(2));
        assert_eq!(result.attempts, 2);
        assert_eq!(result.mystery, "raise");
    }

    #[test]
    fn check_rows_carry_labels() {
        let result = check_guesses(&config("cat", &["cats"])).unwrap();

        assert_eq!(
            result.rows,
            vec![vec![
                ("!c!".to_string(), Label::Correct),
                ("!a!".to_string(), Label::Correct),
                ("!t!".to_string(), Label::Correct),
                ("-s-".to_string(), Label::Unused),
            ]]
        );
        assert_eq!(result.solved_at, None);
    }

    #[test]
    fn check_keeps_labelling_after_a_win() {
        let result = check_guesses(&config("cat", &["cat", "act"])).unwrap();
        assert_eq!(result.solved_at, Some(1));
        assert_eq!(result.attempts, 2);
    }

    #[test]
    fn check_without_guesses_is_empty() {
        let result = check_guesses(&config("cat", &[])).unwrap();
        assert_eq!(result.board, "");
        assert!(result.rows.is_empty());
    }

    #[test]
    fn check_rejects_empty_words() {
        assert!(matches!(
            check_guesses(&config("  ", &["cat"])),
            Err(GameError::EmptyWord)
        ));
        assert!(matches!(
            check_guesses(&config("cat", &["dog", ""])),
            Err(GameError::EmptyWord)
        ));
    }

    #[test]
    fn check_tiles_mode_uses_families() {
        let cfg = config("sa:1 ku:2 ra:3", &["shi:1 ku:2 mo:5"]).with_tiles(true);
        let result = check_guesses(&cfg).unwrap();

        assert_eq!(result.board, "Word: .shi. !ku! -mo- \n");
        assert_eq!(result.mystery, "sakura");
    }

    #[test]
    fn check_tiles_mode_reports_bad_tokens() {
        let cfg = config("sa:1 ku", &["sa"]).with_tiles(true);
        assert!(matches!(
            check_guesses(&cfg),
            Err(GameError::MixedFamilyTags)
        ));
    }
}
