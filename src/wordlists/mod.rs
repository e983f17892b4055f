//! Mystery words for new games
//!
//! Provides an embedded word list compiled into the binary. Guesses are never
//! checked against it; it only supplies mystery words.

mod embedded;

pub use embedded::{MYSTERIES, MYSTERIES_COUNT};

use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a mystery word uniformly at random
///
/// Returns `None` only if the embedded list is empty.
///
/// # Examples
/// ```
/// use wordll::wordlists::{MYSTERIES, random_mystery};
///
/// let word = random_mystery(&mut rand::rng()).unwrap();
/// assert!(MYSTERIES.contains(&word));
/// ```
pub fn random_mystery<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static str> {
    MYSTERIES.choose(rng).copied()
}
