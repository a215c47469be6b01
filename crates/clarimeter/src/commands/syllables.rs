//! Syllables command: per-word syllable estimates and complexity flags.

use clap::Args;
use clarimeter_core::{complexity, syllables};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to score.
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Syllable estimate and complexity flag for one word.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WordScore {
    /// The word as given.
    pub word: String,
    /// Estimated syllable count (at least 1).
    pub syllables: usize,
    /// Whether the word counts toward `complex_words`.
    pub complex: bool,
}

/// Score a single word.
pub fn score(word: &str) -> WordScore {
    WordScore {
        word: word.to_string(),
        syllables: syllables::count_syllables(word),
        complex: complexity::is_complex(word),
    }
}

/// Print syllable counts and complexity for each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let scores: Vec<WordScore> = args.words.iter().map(|w| score(w)).collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    let width = scores.iter().map(|s| s.word.chars().count()).max().unwrap_or(0);
    for s in &scores {
        let flag = if s.complex {
            "complex".yellow().to_string()
        } else {
            String::new()
        };
        println!("{:<width$}  {}  {}", s.word, s.syllables, flag);
    }
    Ok(())
}
