//! Interactive game mode
//!
//! Reads guesses line by line and prints the labelled history after each one.

use crate::core::{ExtendedLetter, GameError, GuessHistory, Label, Tile, Word, parse_tiles};
use crate::output::{write_history, write_play_summary};
use crate::wordlists::random_mystery;
use std::io::{BufRead, Write};
use tracing::info;

/// Configuration for an interactive game
pub struct PlayConfig {
    /// Mystery word; a random embedded word when `None`
    pub mystery: Option<String>,
    pub max_guesses: usize,
    /// Read words as tile tokens instead of single characters
    pub tiles: bool,
    pub color: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(mystery: Option<String>) -> Self {
        Self {
            mystery,
            max_guesses: 6,
            tiles: false,
            color: false,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub solved: bool,
    pub attempts: usize,
    pub mystery: String,
    /// Labels per guess, oldest first
    pub grid: Vec<Vec<Label>>,
}

/// Run one game reading guesses from `input` and writing to `output`
///
/// The game ends on a correct guess, after `max_guesses` guesses, on
/// `quit`, or at end of input. Invalid guesses are reported and do not
/// count as attempts.
///
/// # Errors
///
/// Returns an error if the configured mystery word is invalid, no mystery
/// word is available, or reading/writing the terminal fails.
pub fn run_play<R: BufRead, W: Write>(
    config: &PlayConfig,
    input: R,
    output: W,
) -> Result<PlayOutcome, GameError> {
    let mystery = match &config.mystery {
        Some(mystery) => mystery.clone(),
        None => random_mystery(&mut rand::rng())
            .ok_or(GameError::NoMystery)?
            .to_string(),
    };

    if config.tiles {
        let mystery = if config.mystery.is_some() {
            parse_tiles(&mystery)?.into_word()?
        } else {
            // Embedded words become one singleton tile per character
            let chars: Vec<String> = mystery.chars().map(String::from).collect();
            Word::new(ExtendedLetter::from_strings(chars.as_slice(), None)?)
        };
        play_session(
            mystery,
            |line| parse_tiles(line)?.into_word(),
            config,
            input,
            output,
        )
    } else {
        play_session(mystery.parse()?, str::parse::<Word>, config, input, output)
    }
}

fn play_session<T, P, R, W>(
    mystery: Word<T>,
    parse: P,
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<PlayOutcome, GameError>
where
    T: Tile,
    P: Fn(&str) -> Result<Word<T>, GameError>,
    R: BufRead,
    W: Write,
{
    let mut history = GuessHistory::new(mystery);
    let mut solved = false;

    writeln!(
        output,
        "Guess the {}-tile mystery word in {} tries. Type 'quit' to give up.",
        history.mystery().len(),
        config.max_guesses
    )?;

    while !solved && history.len() < config.max_guesses {
        write!(output, "Guess {}/{}: ", history.len() + 1, config.max_guesses)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            break;
        }

        let guess = match parse(line) {
            Ok(guess) => guess,
            Err(err) => {
                writeln!(output, "❌ {err}")?;
                continue;
            }
        };

        solved = history.submit_guess(guess);
        write_history(&mut output, &history, config.color)?;
    }

    let outcome = PlayOutcome {
        solved,
        attempts: history.len(),
        mystery: history.mystery().text(),
        grid: history.iter().rev().map(Word::labels).collect(),
    };
    info!(solved, attempts = outcome.attempts, "game finished");

    write_play_summary(&mut output, &outcome)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(config: &PlayConfig, input: &str) -> (PlayOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_play(config, Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn fixed(mystery: &str) -> PlayConfig {
        PlayConfig::new(Some(mystery.to_string()))
    }

    #[test]
    fn win_on_second_guess() {
        let (outcome, text) = play(&fixed("raise"), "arise\nraise\n");

        assert!(outcome.solved);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.grid[0][0], Label::Used);
        assert!(text.contains("Word: +a+ +r+ !i! !s! !e! \n"));
        assert!(text.contains("Word: !r! !a! !i! !s! !e! \nWord: +a+ +r+ !i! !s! !e! \n"));
        assert!(text.contains("Solved in 2 guesses!"));
    }

    #[test]
    fn stops_after_max_guesses() {
        let mut config = fixed("cat");
        config.max_guesses = 2;
        let (outcome, text) = play(&config, "dog\ncow\ncat\n");

        assert!(!outcome.solved);
        assert_eq!(outcome.attempts, 2);
        assert!(text.contains("The mystery word was: cat"));
    }

    #[test]
    fn blank_lines_are_rejected_without_using_an_attempt() {
        let (outcome, text) = play(&fixed("cat"), "\n   \ncat\n");

        assert!(outcome.solved);
        assert_eq!(outcome.attempts, 1);
        assert!(text.contains("❌ word must contain at least one letter"));
    }

    #[test]
    fn quit_and_end_of_input_end_the_game() {
        let (outcome, _) = play(&fixed("cat"), "dog\nQUIT\ncat\n");
        assert!(!outcome.solved);
        assert_eq!(outcome.attempts, 1);

        let (outcome, _) = play(&fixed("cat"), "dog");
        assert_eq!(outcome.attempts, 1);
    }

    #[test]
    fn length_mismatch_is_labelled_not_rejected() {
        let (outcome, text) = play(&fixed("cat"), "cats\ncat\n");
        assert_eq!(
            outcome.grid[0],
            vec![Label::Correct, Label::Correct, Label::Correct, Label::Unused]
        );
        assert!(text.contains("Word: !c! !a! !t! -s- \n"));
    }

    #[test]
    fn tile_mode_marks_related_tiles() {
        let mut config = fixed("sa:1 ku:2 ra:3");
        config.tiles = true;
        let (outcome, text) = play(&config, "shi:1 ku:2 mo:5\nka:1 ku\nsa:1 ku:2 ra:3\n");

        assert!(outcome.solved);
        assert_eq!(outcome.mystery, "sakura");
        assert!(text.contains("Word: .shi. !ku! -mo- \n"));
        assert!(text.contains("either every tile carries a family code or none does"));
    }

    #[test]
    fn random_mystery_game_reveals_word() {
        let (outcome, text) = play(&PlayConfig::new(None), "quit\n");

        assert_eq!(outcome.attempts, 0);
        assert_eq!(outcome.mystery.len(), 5);
        assert!(text.contains(&outcome.mystery));
    }

    #[test]
    fn random_mystery_in_tile_mode_uses_single_characters() {
        let mut config = PlayConfig::new(None);
        config.tiles = true;
        let (outcome, text) = play(&config, "");

        assert_eq!(outcome.mystery.len(), 5);
        assert!(text.starts_with("Guess the 5-tile mystery word in 6 tries."));
    }
}
