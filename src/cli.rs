use crate::puzzle::Puzzle;
use crate::wordlist::{EMBEDDED_WORDLIST, load_wordlist_from_file, load_wordlist_from_str};
use clap::Parser;
use std::io;

/// Word search generator CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Words to hide in the puzzle, placed in the order given
    pub words: Vec<String>,

    /// Path to a newline-delimited word list, used instead of WORDS
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Seed for a reproducible puzzle
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log placement decisions
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Picks the word source: the input file, then positional words, then the
/// embedded list.
pub fn resolve_words(cli: &Cli) -> io::Result<Vec<String>> {
    match (&cli.wordlist_path, cli.words.is_empty()) {
        (Some(path), _) => load_wordlist_from_file(path),
        (None, false) => Ok(cli.words.clone()),
        (None, true) => Ok(load_wordlist_from_str(EMBEDDED_WORDLIST)),
    }
}

/// Requested words that did not make it into the grid.
pub fn dropped_words<'a>(requested: &'a [String], puzzle: &Puzzle) -> &'a [String] {
    &requested[puzzle.words().len().min(requested.len())..]
}

pub fn display_puzzle(puzzle: &Puzzle) {
    println!("{puzzle}");
}

pub fn display_word_summary(requested: &[String], puzzle: &Puzzle) {
    eprintln!("Placed {} of {} words:", puzzle.words().len(), requested.len());
    for word in puzzle.words() {
        eprintln!("  {word}");
    }
    let dropped = dropped_words(requested, puzzle);
    if !dropped.is_empty() {
        eprintln!("No room for: {}", dropped.join(", "));
    }
}
