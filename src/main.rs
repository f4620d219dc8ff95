use std::process::ExitCode;
use word_search::cli::{display_puzzle, display_word_summary, parse_cli, resolve_words};
use word_search::logging::init_logger;
use word_search::puzzle::Puzzle;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.verbose);

    let words = match resolve_words(&cli) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word list: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.seed {
        Some(seed) => Puzzle::from_seed(&words, seed),
        None => Puzzle::new(&words),
    };
    match result {
        Ok(puzzle) => {
            display_puzzle(&puzzle);
            display_word_summary(&words, &puzzle);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to build puzzle: {e}");
            ExitCode::FAILURE
        }
    }
}
