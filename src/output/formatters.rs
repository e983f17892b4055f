//! Formatting utilities for terminal output

use crate::core::Label;
use colored::{ColoredString, Colorize};

/// Format a row of labels as an emoji string
///
/// Unlabelled tiles show as a black square.
#[must_use]
pub fn labels_to_emoji(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| match label {
            Label::Correct => '🟩',
            Label::Used => '🟨',
            Label::Unused => '⬜',
            Label::Unset => '⬛',
        })
        .collect()
}

/// Colour a rendered tile according to its label
#[must_use]
pub fn paint(text: &str, label: Label) -> ColoredString {
    match label {
        Label::Correct => text.green().bold(),
        Label::Used => text.yellow(),
        Label::Unused => text.dimmed(),
        Label::Unset => text.normal(),
    }
}
