//! Caesar-cipher word with shift guessing
//!
//! A `CipherWord` holds a plaintext word and a hidden shift. The shifted form
//! is produced on request, and every guess at the shift is logged for
//! statistics.

use super::{GuessLog, Shift};
use crate::random::{ShiftSource, ThreadRngSource};
use std::fmt;

/// Shortest word the constructors will accept
///
/// Shorter words are replaced by the empty string. `set_word` does not apply
/// this limit.
pub const MIN_WORD_LENGTH: usize = 4;

/// A word, its Caesar shift, and the guesses made at that shift
///
/// The shift is fixed at construction. The word can be replaced at any time
/// and the guess log grows until [`CipherWord::reset`].
///
/// There is no internal locking. Every mutating method takes `&mut self`, so
/// sharing one instance between threads requires an external `Mutex`.
///
/// # Examples
/// ```
/// use caesar_word::core::CipherWord;
///
/// let mut cipher = CipherWord::with_word_and_shift("Tester", 5);
/// assert_eq!(cipher.encrypted_word(), "Yjxyjw");
///
/// assert!(!cipher.guess(3));
/// assert!(cipher.guess(5));
/// assert_eq!(cipher.total_guesses(), 2);
/// assert_eq!(cipher.low_guesses(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherWord {
    word: String,
    shift: Shift,
    guesses: GuessLog,
}

/// Snapshot of guess statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessStats {
    /// Number of guesses recorded
    pub total: usize,
    /// Guesses below the shift
    pub low: usize,
    /// Guesses above the shift
    pub high: usize,
    /// Guesses equal to the shift
    pub correct: usize,
    /// Mean guess value, `0.0` with no guesses
    pub average: f64,
}

impl CipherWord {
    /// Empty word with a random shift in `1..=25`
    #[must_use]
    pub fn new() -> Self {
        Self::from_source(&mut ThreadRngSource::new())
    }

    /// Empty word with a shift drawn from `source`
    #[must_use]
    pub fn from_source<S: ShiftSource>(source: &mut S) -> Self {
        Self::build(String::new(), Shift::new(source.next_shift()))
    }

    /// Empty word with the given shift
    ///
    /// An explicit `0` is kept and means the word is not shifted at all.
    #[must_use]
    pub fn with_shift(shift: i32) -> Self {
        Self::build(String::new(), Shift::new(shift))
    }

    /// Word with a random shift in `1..=25`
    ///
    /// Words shorter than [`MIN_WORD_LENGTH`] are replaced by `""`.
    #[must_use]
    pub fn with_word(word: impl Into<String>) -> Self {
        Self::with_word_from(word, &mut ThreadRngSource::new())
    }

    /// Word with a shift drawn from `source`
    #[must_use]
    pub fn with_word_from<S: ShiftSource>(word: impl Into<String>, source: &mut S) -> Self {
        let shift = Shift::new(source.next_shift());
        Self::build(accept_word(word.into()), shift)
    }

    /// Word with the given shift
    ///
    /// Words shorter than [`MIN_WORD_LENGTH`] are replaced by `""`.
    #[must_use]
    pub fn with_word_and_shift(word: impl Into<String>, shift: i32) -> Self {
        Self::build(accept_word(word.into()), Shift::new(shift))
    }

    const fn build(word: String, shift: Shift) -> Self {
        Self {
            word,
            shift,
            guesses: GuessLog::new(),
        }
    }

    /// Replace the held word
    ///
    /// No length check is applied. The shift and guess log are untouched.
    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
    }

    /// The plaintext word currently held
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The shift applied by `encrypted_word`
    #[inline]
    #[must_use]
    pub const fn shift(&self) -> Shift {
        self.shift
    }

    /// The held word with every ASCII letter shifted forward
    ///
    /// Computed fresh on each call. Characters other than ASCII letters are
    /// copied unchanged. Returns `""` when no word is held.
    #[must_use]
    pub fn encrypted_word(&self) -> String {
        self.shift.encrypt(&self.word)
    }

    /// Record a guess and report whether it is the shift
    ///
    /// Every value is logged, whether or not it is correct or even in range.
    pub fn guess(&mut self, value: i32) -> bool {
        self.guesses.record(value);
        let correct = self.shift.matches(value);
        tracing::trace!(value, correct, total = self.guesses.len(), "shift guess");
        correct
    }

    /// Clear the guess log and the held word, keeping the shift
    pub fn reset(&mut self) {
        self.guesses.clear();
        self.word.clear();
    }

    /// Every guess made since construction or the last reset, in order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[i32] {
        self.guesses.as_slice()
    }

    /// Number of guesses since construction or the last reset
    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.guesses.len()
    }

    /// Guesses strictly below the shift
    #[must_use]
    pub fn low_guesses(&self) -> usize {
        self.guesses.below(self.shift)
    }

    /// Guesses strictly above the shift
    #[must_use]
    pub fn high_guesses(&self) -> usize {
        self.guesses.above(self.shift)
    }

    /// Mean of all guesses, `0.0` when none have been made
    #[must_use]
    pub fn average_guess(&self) -> f64 {
        self.guesses.average()
    }

    /// Snapshot of every guess statistic at once
    #[must_use]
    pub fn stats(&self) -> GuessStats {
        GuessStats {
            total: self.total_guesses(),
            low: self.low_guesses(),
            high: self.high_guesses(),
            correct: self.guesses.exact(self.shift),
            average: self.average_guess(),
        }
    }
}

impl Default for CipherWord {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CipherWord {
    /// Shows only the encrypted form so the plaintext is not revealed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encrypted_word())
    }
}

fn accept_word(word: String) -> String {
    let len = word.chars().count();
    if len < MIN_WORD_LENGTH {
        tracing::debug!(len, min = MIN_WORD_LENGTH, "word too short, holding empty word");
        String::new()
    } else {
        word
    }
}
