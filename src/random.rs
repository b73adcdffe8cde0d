//! Random shift sources
//!
//! Constructors that pick a shift themselves draw from a [`ShiftSource`]
//! instead of a hidden global, so callers can substitute a seeded or fixed
//! generator.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Smallest shift a random source may produce
pub const MIN_RANDOM_SHIFT: i32 = 1;

/// Largest shift a random source may produce
pub const MAX_RANDOM_SHIFT: i32 = 25;

/// A source of default shift values
///
/// Implementations must return values in `MIN_RANDOM_SHIFT..=MAX_RANDOM_SHIFT`.
pub trait ShiftSource {
    /// Draw the next shift
    fn next_shift(&mut self) -> i32;
}

impl<S: ShiftSource + ?Sized> ShiftSource for &mut S {
    fn next_shift(&mut self) -> i32 {
        (**self).next_shift()
    }
}

impl<S: ShiftSource + ?Sized> ShiftSource for Box<S> {
    fn next_shift(&mut self) -> i32 {
        (**self).next_shift()
    }
}

/// Process randomness via the thread-local generator
#[derive(Debug, Default, Clone)]
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    /// Source backed by `rand::rng()`
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl ShiftSource for ThreadRngSource {
    fn next_shift(&mut self) -> i32 {
        self.rng.random_range(MIN_RANDOM_SHIFT..=MAX_RANDOM_SHIFT)
    }
}

/// Reproducible randomness from a fixed seed
///
/// # Examples
/// ```
/// use caesar_word::random::{SeededSource, ShiftSource};
///
/// let mut a = SeededSource::new(42);
/// let mut b = SeededSource::new(42);
/// assert_eq!(a.next_shift(), b.next_shift());
/// ```
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Source whose sequence is fixed by `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ShiftSource for SeededSource {
    fn next_shift(&mut self) -> i32 {
        self.rng.random_range(MIN_RANDOM_SHIFT..=MAX_RANDOM_SHIFT)
    }
}

/// Cycles through a fixed list of shifts
///
/// Values outside the random range are clamped into it. An empty list
/// always yields `MIN_RANDOM_SHIFT`.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<i32>,
    next: usize,
}

impl FixedSource {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(MIN_RANDOM_SHIFT, MAX_RANDOM_SHIFT))
                .collect(),
            next: 0,
        }
    }

    /// A source that always returns `value`
    #[must_use]
    pub fn constant(value: i32) -> Self {
        Self::new([value])
    }
}

impl ShiftSource for FixedSource {
    fn next_shift(&mut self) -> i32 {
        if self.values.is_empty() {
            return MIN_RANDOM_SHIFT;
        }

        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
