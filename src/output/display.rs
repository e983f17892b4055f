//! Display functions for boards and command results

use super::formatters::{labels_to_emoji, paint};
use crate::commands::{CheckResult, PlayOutcome};
use crate::core::{GuessHistory, Label, Tile, Word};
use colored::Colorize;
use std::io::{self, Write};

/// Render one row as `"Word: "` followed by each tile and a space
///
/// Without colour this is exactly the word's `Display` form.
#[must_use]
pub fn render_row<I, S>(cells: I, color: bool) -> String
where
    I: IntoIterator<Item = (S, Label)>,
    S: AsRef<str>,
{
    let mut line = String::from("Word: ");
    for (text, label) in cells {
        if color {
            line.push_str(&paint(text.as_ref(), label).to_string());
        } else {
            line.push_str(text.as_ref());
        }
        line.push(' ');
    }
    line
}

/// Render a labelled word, optionally coloured by label
#[must_use]
pub fn render_word<T: Tile>(word: &Word<T>, color: bool) -> String {
    render_row(
        word.iter().map(|tile| (tile.to_string(), tile.label())),
        color,
    )
}

/// Write every guess of `history`, most recent first, one per line
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_history<T: Tile, W: Write>(
    out: &mut W,
    history: &GuessHistory<T>,
    color: bool,
) -> io::Result<()> {
    for word in history.iter() {
        writeln!(out, "{}", render_word(word, color))?;
    }
    Ok(())
}

/// Print the result of checking guesses
pub fn print_check_result(result: &CheckResult, color: bool) {
    for row in &result.rows {
        println!("{}", render_row(row.iter().map(|(t, l)| (t, *l)), color));
    }

    println!();
    match result.solved_at {
        Some(attempt) => println!(
            "{}",
            format!("✅ Guess {attempt} matches the mystery word")
                .green()
                .bold()
        ),
        None => println!(
            "{}",
            format!("❌ No guess out of {} matches", result.attempts).red()
        ),
    }
}

/// Print the closing summary of a played game
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_play_summary<W: Write>(out: &mut W, outcome: &PlayOutcome) -> io::Result<()> {
    writeln!(out)?;
    if outcome.solved {
        let noun = if outcome.attempts == 1 {
            "guess"
        } else {
            "guesses"
        };
        writeln!(out, "🎉 Solved in {} {noun}!", outcome.attempts)?;
    } else {
        writeln!(out, "The mystery word was: {}", outcome.mystery)?;
    }

    for labels in &outcome.grid {
        writeln!(out, "  {}", labels_to_emoji(labels))?;
    }
    Ok(())
}
