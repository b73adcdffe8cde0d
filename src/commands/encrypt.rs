//! One-shot word encryption command

use crate::core::{CipherWord, Shift};
use crate::random::ShiftSource;

/// Result of encrypting a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptResult {
    /// Word as given on the command line
    pub input: String,
    /// Word actually held after the length check
    pub word: String,
    pub encrypted: String,
    pub shift: Shift,
    /// True when the input was too short and replaced by `""`
    pub coerced: bool,
}

/// Encrypt `word` with the given shift, or a random one from `source`
///
/// The word goes through the constructors, so inputs shorter than the
/// minimum length come back empty with `coerced` set.
pub fn encrypt_word<S: ShiftSource>(
    word: &str,
    shift: Option<i32>,
    source: &mut S,
) -> EncryptResult {
    let cipher = match shift {
        Some(shift) => CipherWord::with_word_and_shift(word, shift),
        None => CipherWord::with_word_from(word, source),
    };

    EncryptResult {
        input: word.to_string(),
        word: cipher.word().to_string(),
        encrypted: cipher.encrypted_word(),
        shift: cipher.shift(),
        coerced: !word.is_empty() && cipher.word().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSource;

    #[test]
    fn encrypt_with_explicit_shift() {
        let result = encrypt_word("Tester", Some(5), &mut FixedSource::constant(1));
        assert_eq!(result.encrypted, "Yjxyjw");
        assert_eq!(result.shift.value(), 5);
        assert!(!result.coerced);
    }

    #[test]
    fn encrypt_with_random_shift() {
        let result = encrypt_word("Oliver", None, &mut FixedSource::constant(2));
        assert_eq!(result.encrypted, "Qnkxgt");
        assert_eq!(result.shift.value(), 2);
    }

    #[test]
    fn encrypt_short_word_is_coerced() {
        let result = encrypt_word("cat", Some(4), &mut FixedSource::constant(1));
        assert_eq!(result.input, "cat");
        assert_eq!(result.word, "");
        assert_eq!(result.encrypted, "");
        assert!(result.coerced);
    }

    #[test]
    fn encrypt_empty_word_is_not_flagged() {
        let result = encrypt_word("", Some(4), &mut FixedSource::constant(1));
        assert!(!result.coerced);
    }
}
