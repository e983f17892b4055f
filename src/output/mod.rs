//! Terminal output formatting
//!
//! Display utilities for boards, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, render_row, render_word, write_history, write_play_summary,
};
