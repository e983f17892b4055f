//! wordll - CLI
//!
//! Play a Wordle-style game in the terminal, or label a list of guesses
//! against a known mystery word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use wordll::{
    commands::{CheckConfig, PlayConfig, check_guesses, run_play},
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordll",
    about = "Wordle-style guessing game with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read words as tile tokens ("sa:1 shi:1 ku:2") instead of single characters
    #[arg(short, long, global = true)]
    tiles: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every submitted guess
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Mystery word; a random one is picked when omitted
        #[arg(short, long)]
        mystery: Option<String>,

        /// Number of guesses allowed
        #[arg(short = 'n', long, default_value = "6")]
        max_guesses: usize,
    },

    /// Label guesses against a known mystery word
    Check {
        /// The mystery word
        mystery: String,

        /// Guesses, oldest first
        guesses: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let color = !cli.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mystery: None,
        max_guesses: 6,
    });

    match command {
        Commands::Play {
            mystery,
            max_guesses,
        } => run_play_command(mystery, max_guesses, cli.tiles, color),
        Commands::Check { mystery, guesses } => {
            run_check_command(mystery, guesses, cli.tiles, color)
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WORDLL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn run_play_command(
    mystery: Option<String>,
    max_guesses: usize,
    tiles: bool,
    color: bool,
) -> Result<()> {
    let config = PlayConfig {
        mystery,
        max_guesses,
        tiles,
        color,
    };

    run_play(&config, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run_check_command(
    mystery: String,
    guesses: Vec<String>,
    tiles: bool,
    color: bool,
) -> Result<()> {
    let config = CheckConfig::new(mystery, guesses).with_tiles(tiles);
    let result = check_guesses(&config)?;

    print_check_result(&result, color);
    Ok(())
}
