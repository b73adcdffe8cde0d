//! Scripted walkthrough of a `CipherWord`
//!
//! Runs a fixed sequence of operations and reports every observed value.

use crate::core::{CipherWord, GuessStats};
use crate::random::{SeededSource, ShiftSource, ThreadRngSource};

/// Word set before the first encryption
pub const FIRST_WORD: &str = "Bodacious";

/// Word set after the reset
pub const SECOND_WORD: &str = "Tropique";

/// Shift values guessed during the walkthrough
pub const DEMO_GUESSES: [i32; 5] = [5, 10, 15, 20, 25];

/// Configuration for the demo run
pub struct DemoConfig {
    /// Seed for the random shift; `None` uses process randomness
    pub seed: Option<u64>,
}

impl DemoConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

/// Result of the demo run
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub first_word: String,
    pub first_encrypted: String,
    pub guesses: Vec<(i32, bool)>,
    pub stats: GuessStats,
    pub total_after_reset: usize,
    pub second_word: String,
    pub second_encrypted: String,
}

/// Run the walkthrough with the configured random source
#[must_use]
pub fn run_demo(config: &DemoConfig) -> DemoReport {
    match config.seed {
        Some(seed) => run_demo_with(&mut SeededSource::new(seed)),
        None => run_demo_with(&mut ThreadRngSource::new()),
    }
}

/// Run the walkthrough with an explicit random source
///
/// The sequence is: construct with a random shift, set a word, encrypt it,
/// guess five shifts, read the statistics, reset, set a second word and
/// encrypt again.
#[must_use]
pub fn run_demo_with<S: ShiftSource>(source: &mut S) -> DemoReport {
    let mut cipher = CipherWord::from_source(source);
    tracing::debug!("demo started");

    cipher.set_word(FIRST_WORD);
    let first_encrypted = cipher.encrypted_word();

    let guesses = DEMO_GUESSES
        .iter()
        .map(|&value| (value, cipher.guess(value)))
        .collect();

    let stats = cipher.stats();

    cipher.reset();
    let total_after_reset = cipher.total_guesses();

    cipher.set_word(SECOND_WORD);
    let second_encrypted = cipher.encrypted_word();

    DemoReport {
        first_word: FIRST_WORD.to_string(),
        first_encrypted,
        guesses,
        stats,
        total_after_reset,
        second_word: SECOND_WORD.to_string(),
        second_encrypted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shift;
    use crate::random::FixedSource;

    #[test]
    fn demo_with_fixed_shift() {
        let report = run_demo_with(&mut FixedSource::constant(15));

        assert_eq!(report.first_encrypted, Shift::new(15).encrypt(FIRST_WORD));
        assert_eq!(report.second_encrypted, Shift::new(15).encrypt(SECOND_WORD));
        assert_eq!(
            report.guesses,
            vec![(5, false), (10, false), (15, true), (20, false), (25, false)]
        );
        assert_eq!(report.stats.total, 5);
        assert_eq!(report.stats.low, 2);
        assert_eq!(report.stats.high, 2);
        assert!((report.stats.average - 15.0).abs() < f64::EPSILON);
        assert_eq!(report.total_after_reset, 0);
    }

    #[test]
    fn demo_with_shift_between_guesses() {
        let report = run_demo_with(&mut FixedSource::constant(3));

        assert_eq!(report.first_encrypted, "Ergdflrxv");
        assert!(report.guesses.iter().all(|&(_, correct)| !correct));
        assert_eq!(report.stats.low, 0);
        assert_eq!(report.stats.high, 5);
    }

    #[test]
    fn seeded_demo_is_reproducible() {
        let a = run_demo(&DemoConfig::new(Some(99)));
        let b = run_demo(&DemoConfig::new(Some(99)));

        assert_eq!(a.first_encrypted, b.first_encrypted);
        assert_eq!(a.guesses, b.guesses);
    }

    #[test]
    fn unseeded_demo_always_logs_five_guesses() {
        let report = run_demo(&DemoConfig::new(None));
        assert_eq!(report.stats.total, DEMO_GUESSES.len());
        assert_eq!(report.total_after_reset, 0);
        assert_eq!(report.second_word, SECOND_WORD);
    }
}
