//! Caesar Word
//!
//! A Caesar-cipher word encoder with shift guessing and guess statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use caesar_word::core::CipherWord;
//!
//! let mut cipher = CipherWord::with_word_and_shift("Tester", 5);
//! assert_eq!(cipher.encrypted_word(), "Yjxyjw");
//!
//! assert!(!cipher.guess(4));
//! assert!(cipher.guess(5));
//! println!("Average guess: {}", cipher.average_guess());
//! ```

// Core domain types
pub mod core;

// Injectable randomness
pub mod random;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
