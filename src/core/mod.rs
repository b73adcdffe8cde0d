//! Core domain types for the Caesar word cipher
//!
//! This module contains the domain types with no I/O. Randomness enters only
//! through an explicit [`crate::random::ShiftSource`].

mod cipher_word;
mod guess_log;
mod shift;

pub use cipher_word::{CipherWord, GuessStats, MIN_WORD_LENGTH};
pub use guess_log::GuessLog;
pub use shift::{ALPHABET_SIZE, Shift};
