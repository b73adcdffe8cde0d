//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_demo_report, print_encrypt_result, print_play_outcome, print_stats};
