//! Display functions for command results

use super::formatters::{guess_bar, verdict};
use crate::commands::{DemoReport, EncryptResult, PlayOutcome};
use crate::core::GuessStats;
use colored::Colorize;

/// Print the scripted demo walkthrough
pub fn print_demo_report(report: &DemoReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CAESAR WORD DEMO".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nSetting word to '{}'", report.first_word);
    println!(
        "Encrypted form of '{}': {}",
        report.first_word,
        report.first_encrypted.bright_yellow().bold()
    );

    println!("\n🔎 {}", "Guessing a few shift values:".bright_cyan().bold());
    for &(value, correct) in &report.guesses {
        let answer = if correct {
            verdict(correct).green().bold()
        } else {
            verdict(correct).red()
        };
        println!("   Shift is {value:2}? {answer}");
    }

    print_stats(&report.stats);

    println!("\nResetting the guesses...");
    println!("   New guess total: {}", report.total_after_reset);

    println!("\nSetting new word '{}'", report.second_word);
    println!(
        "Encrypted form of '{}': {}",
        report.second_word,
        report.second_encrypted.bright_yellow().bold()
    );
}

/// Print guess statistics
pub fn print_stats(stats: &GuessStats) {
    println!("\n📊 {}", "Guess statistics:".bright_cyan().bold());
    println!("   Below shift:   {}", stats.low);
    println!("   Above shift:   {}", stats.high);
    println!("   Total guesses: {}", stats.total);
    println!(
        "   Average guess: {}",
        format!("{:.2}", stats.average).bright_yellow()
    );
    println!("   Spread:        [{}]", guess_bar(stats.low, stats.high, 20));
}

/// Print the result of a one-shot encryption
pub fn print_encrypt_result(result: &EncryptResult) {
    if result.coerced {
        println!(
            "{}",
            format!(
                "⚠ '{}' is shorter than the minimum word length; no word held",
                result.input
            )
            .yellow()
        );
    }

    println!(
        "{} → {} (shift {})",
        result.word,
        result.encrypted.bright_yellow().bold(),
        result.shift
    );
}

/// Print how an interactive game ended
pub fn print_play_outcome(outcome: &PlayOutcome) {
    if outcome.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.stats.total)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Gave up after {} guesses", outcome.stats.total)
                .red()
                .bold()
        );
    }
    print_stats(&outcome.stats);
}
