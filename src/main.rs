//! Caesar Word - CLI
//!
//! Demonstrates the Caesar-cipher word encoder, encrypts single words, and
//! runs an interactive shift-guessing game.

use anyhow::{Context, Result};
use caesar_word::{
    commands::{DemoConfig, PlayConfig, encrypt_word, run_demo, run_play},
    logging::init_tracing,
    output::{print_demo_report, print_encrypt_result, print_play_outcome},
    random::{SeededSource, ShiftSource, ThreadRngSource},
};
use clap::{Parser, Subcommand};
use std::io;

#[derive(Parser)]
#[command(
    name = "caesar_word",
    about = "Caesar-cipher word encoder with shift guessing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random shifts (default: process randomness)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging (overridden by CAESAR_WORD_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scripted walkthrough of every operation (default)
    Demo,

    /// Encrypt a single word
    Encrypt {
        /// Word to encrypt (at least 4 letters)
        word: String,

        /// Shift to apply (default: random 1-25)
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<i32>,
    },

    /// Guess the shift of an encrypted word
    Play {
        /// Word to encrypt (default: Bodacious)
        #[arg(short, long)]
        word: Option<String>,

        /// Fix the shift instead of drawing a random one
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<i32>,
    },
}

/// Build the random source selected by `--seed`
fn shift_source(seed: Option<u64>) -> Box<dyn ShiftSource> {
    match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource::new()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to the demo if no command given
    let command = cli.command.unwrap_or(Commands::Demo);

    match command {
        Commands::Demo => {
            let report = run_demo(&DemoConfig::new(cli.seed));
            print_demo_report(&report);
            Ok(())
        }
        Commands::Encrypt { word, shift } => {
            let mut source = shift_source(cli.seed);
            let result = encrypt_word(&word, shift, &mut source);
            print_encrypt_result(&result);
            Ok(())
        }
        Commands::Play { word, shift } => run_play_command(word, shift, cli.seed),
    }
}

fn run_play_command(word: Option<String>, shift: Option<i32>, seed: Option<u64>) -> Result<()> {
    let config = PlayConfig::new(word, shift);
    let mut source = shift_source(seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_play(&config, &mut source, &mut stdin.lock(), &mut stdout.lock())
        .context("interactive game failed")?;

    print_play_outcome(&outcome);
    Ok(())
}
