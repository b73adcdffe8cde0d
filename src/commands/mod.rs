//! Command implementations

pub mod demo;
pub mod encrypt;
pub mod play;

pub use demo::{DemoConfig, DemoReport, run_demo, run_demo_with};
pub use encrypt::{EncryptResult, encrypt_word};
pub use play::{PlayConfig, PlayOutcome, run_play};
