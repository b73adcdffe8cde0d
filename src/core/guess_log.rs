//! Append-only record of shift guesses
//!
//! Statistics are computed on demand against a given shift.

use super::Shift;

/// Ordered log of every guessed shift value
///
/// Values are stored exactly as guessed, including negatives and values
/// outside the alphabet range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLog {
    entries: Vec<i32>,
}

impl GuessLog {
    /// Create an empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a guess
    pub fn record(&mut self, guess: i32) {
        self.entries.push(guess);
    }

    /// Remove every guess
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All guesses in call order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.entries
    }

    /// Number of guesses recorded
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no guesses have been recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of guesses strictly below `shift`
    #[must_use]
    pub fn below(&self, shift: Shift) -> usize {
        let target = i32::from(shift.value());
        self.entries.iter().filter(|&&g| g < target).count()
    }

    /// Number of guesses strictly above `shift`
    #[must_use]
    pub fn above(&self, shift: Shift) -> usize {
        let target = i32::from(shift.value());
        self.entries.iter().filter(|&&g| g > target).count()
    }

    /// Number of guesses equal to `shift`
    #[must_use]
    pub fn exact(&self, shift: Shift) -> usize {
        self.entries.iter().filter(|&&g| shift.matches(g)).count()
    }

    /// Arithmetic mean of all guesses
    ///
    /// Returns `0.0` for an empty log.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }

        // Sum in i64 so many large guesses cannot overflow
        let sum: i64 = self.entries.iter().map(|&g| i64::from(g)).sum();
        sum as f64 / self.entries.len() as f64
    }
}
