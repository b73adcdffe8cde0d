//! Interactive shift-guessing game
//!
//! Text-based game over any reader/writer pair: the player sees the encrypted
//! word and guesses the shift until it is found.

use crate::core::{CipherWord, GuessStats};
use crate::random::ShiftSource;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Word used when none is supplied
pub const DEFAULT_WORD: &str = "Bodacious";

/// Configuration for an interactive game
pub struct PlayConfig {
    pub word: String,
    /// Fixed shift; `None` draws one from the random source
    pub shift: Option<i32>,
}

impl PlayConfig {
    #[must_use]
    pub fn new(word: Option<String>, shift: Option<i32>) -> Self {
        Self {
            word: word.unwrap_or_else(|| DEFAULT_WORD.to_string()),
            shift,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    pub solved: bool,
    pub stats: GuessStats,
}

/// A single line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Guess(i32),
    Stats,
    Reset,
    Quit,
    Invalid,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "stats" | "s" => Self::Stats,
            "reset" | "r" => Self::Reset,
            other => other.parse().map_or(Self::Invalid, Self::Guess),
        }
    }
}

/// Run the game until the shift is guessed, the player quits, or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<S, R, W>(
    config: &PlayConfig,
    source: &mut S,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome>
where
    S: ShiftSource,
    R: BufRead,
    W: Write,
{
    let mut cipher = match config.shift {
        Some(shift) => CipherWord::with_word_and_shift(config.word.as_str(), shift),
        None => CipherWord::with_word_from(config.word.as_str(), source),
    };
    if cipher.word().is_empty() {
        // Too short for the constructor; set_word takes it as is
        cipher.set_word(config.word.as_str());
    }

    writeln!(output, "Encrypted word: {}", cipher.encrypted_word())?;
    writeln!(output, "Guess the shift (0-25). Commands: 'stats', 'reset', 'quit'")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "Shift: ")?;
        output.flush().context("failed to flush prompt")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read guess")?;
        if read == 0 {
            tracing::debug!("input closed before the shift was found");
            writeln!(output)?;
            return Ok(PlayOutcome {
                solved: false,
                stats: cipher.stats(),
            });
        }

        // Invalid UTF-8 becomes U+FFFD and then fails to parse as a guess
        let line = String::from_utf8_lossy(&buf);
        match Command::parse(&line) {
            Command::Guess(value) => {
                if cipher.guess(value) {
                    writeln!(
                        output,
                        "Correct! The word was '{}' (found in {} guesses)",
                        cipher.word(),
                        cipher.total_guesses()
                    )?;
                    return Ok(PlayOutcome {
                        solved: true,
                        stats: cipher.stats(),
                    });
                }
                let hint = if value < i32::from(cipher.shift().value()) {
                    "Too low"
                } else {
                    "Too high"
                };
                writeln!(output, "{hint}")?;
            }
            Command::Stats => write_stats(output, &cipher.stats())?,
            Command::Reset => {
                // reset() also clears the word, so put it back for the new round
                cipher.reset();
                cipher.set_word(config.word.as_str());
                writeln!(output, "Guesses cleared")?;
            }
            Command::Quit => {
                return Ok(PlayOutcome {
                    solved: false,
                    stats: cipher.stats(),
                });
            }
            Command::Invalid => {
                writeln!(output, "Not a number: '{}'", line.trim())?;
            }
        }
    }
}

fn write_stats<W: Write>(output: &mut W, stats: &GuessStats) -> Result<()> {
    writeln!(
        output,
        "Guesses: {} total, {} low, {} high, average {:.2}",
        stats.total, stats.low, stats.high, stats.average
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSource;
    use std::io::Cursor;

    fn play(word: &str, shift: i32, script: &str) -> (PlayOutcome, String) {
        let config = PlayConfig::new(Some(word.to_string()), Some(shift));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_play(
            &config,
            &mut FixedSource::constant(1),
            &mut input,
            &mut output,
        )
        .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse("12\n"), Command::Guess(12));
        assert_eq!(Command::parse("  -4 "), Command::Guess(-4));
        assert_eq!(Command::parse("STATS"), Command::Stats);
        assert_eq!(Command::parse("r"), Command::Reset);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("twelve"), Command::Invalid);
        assert_eq!(Command::parse(""), Command::Invalid);
    }

    #[test]
    fn solved_after_hints() {
        let (outcome, text) = play("Tester", 5, "2\n9\n5\n");

        assert!(outcome.solved);
        assert_eq!(outcome.stats.total, 3);
        assert_eq!(outcome.stats.low, 1);
        assert_eq!(outcome.stats.high, 1);
        assert!(text.contains("Encrypted word: Yjxyjw"));
        assert!(text.contains("Too low"));
        assert!(text.contains("Too high"));
        assert!(text.contains("Correct! The word was 'Tester'"));
    }

    #[test]
    fn invalid_input_is_not_recorded() {
        let (outcome, text) = play("Tester", 5, "abc\n5\n");
        assert!(outcome.solved);
        assert_eq!(outcome.stats.total, 1);
        assert!(text.contains("Not a number: 'abc'"));
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_skipped() {
        let config = PlayConfig::new(Some("Tester".to_string()), Some(5));
        let mut input = Cursor::new(b"\xff\xfe\n5\n".to_vec());
        let mut output = Vec::new();
        let outcome = run_play(
            &config,
            &mut FixedSource::constant(1),
            &mut input,
            &mut output,
        )
        .unwrap();

        assert!(outcome.solved);
        assert_eq!(outcome.stats.total, 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Not a number: '\u{fffd}\u{fffd}'"));
    }

    #[test]
    fn quit_ends_unsolved() {
        let (outcome, _) = play("Tester", 5, "1\nquit\n7\n");
        assert!(!outcome.solved);
        assert_eq!(outcome.stats.total, 1);
    }

    #[test]
    fn end_of_input_ends_unsolved() {
        let (outcome, _) = play("Tester", 5, "1\n2\n");
        assert!(!outcome.solved);
        assert_eq!(outcome.stats.total, 2);
    }

    #[test]
    fn reset_clears_guesses_and_keeps_word() {
        let (outcome, text) = play("Tester", 5, "1\n2\nreset\nstats\n5\n");
        assert!(outcome.solved);
        assert_eq!(outcome.stats.total, 1);
        assert!(text.contains("Guesses cleared"));
        assert!(text.contains("Guesses: 0 total, 0 low, 0 high, average 0.00"));
        assert!(text.contains("The word was 'Tester'"));
    }

    #[test]
    fn short_word_is_still_played() {
        let (_, text) = play("abc", 1, "1\n");
        assert!(text.contains("Encrypted word: bcd"));
    }

    #[test]
    fn random_shift_from_source() {
        let config = PlayConfig::new(None, None);
        let mut input = Cursor::new(b"7\n".to_vec());
        let mut output = Vec::new();
        let outcome = run_play(
            &config,
            &mut FixedSource::constant(7),
            &mut input,
            &mut output,
        )
        .unwrap();

        assert!(outcome.solved);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(&format!("The word was '{DEFAULT_WORD}'")));
    }
}
