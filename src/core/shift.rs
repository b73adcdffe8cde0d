//! Caesar shift representation
//!
//! A Shift stores a rotation amount already reduced into the 26-letter alphabet.

use std::fmt;

/// Number of letters in the English alphabet
pub const ALPHABET_SIZE: u8 = 26;

/// A Caesar shift normalized into `0..=25`
///
/// Negative inputs are folded through their absolute value, so `-3` and `3`
/// produce the same shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shift(u8);

impl Shift {
    /// The identity shift
    pub const ZERO: Self = Self(0);

    /// Create a shift from any integer as `abs(amount) mod 26`
    ///
    /// # Examples
    /// ```
    /// use caesar_word::core::Shift;
    ///
    /// assert_eq!(Shift::new(5).value(), 5);
    /// assert_eq!(Shift::new(-5).value(), 5);
    /// assert_eq!(Shift::new(27).value(), 1);
    /// assert_eq!(Shift::new(i32::MIN).value(), 24);
    /// ```
    #[must_use]
    pub const fn new(amount: i32) -> Self {
        // unsigned_abs keeps i32::MIN in range
        Self((amount.unsigned_abs() % ALPHABET_SIZE as u32) as u8)
    }

    /// Get the shift amount (0-25)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Shift that undoes this one
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self((ALPHABET_SIZE - self.0) % ALPHABET_SIZE)
    }

    /// Check whether a guessed value is exactly this shift
    #[inline]
    #[must_use]
    pub fn matches(self, guess: i32) -> bool {
        guess == i32::from(self.0)
    }

    /// Shift a single character
    ///
    /// ASCII letters rotate within their own case. Every other character is
    /// returned unchanged.
    #[must_use]
    pub const fn apply(self, c: char) -> char {
        let base = match c {
            'A'..='Z' => b'A',
            'a'..='z' => b'a',
            _ => return c,
        };
        let offset = (c as u8 - base + self.0) % ALPHABET_SIZE;
        (base + offset) as char
    }

    /// Shift every character of `text`
    ///
    /// # Examples
    /// ```
    /// use caesar_word::core::Shift;
    ///
    /// assert_eq!(Shift::new(6).encrypt("Salad"), "Ygrgj");
    /// assert_eq!(Shift::new(3).encrypt("xyz"), "abc");
    /// ```
    #[must_use]
    pub fn encrypt(self, text: &str) -> String {
        text.chars().map(|c| self.apply(c)).collect()
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
