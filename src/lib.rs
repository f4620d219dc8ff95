// Library interface for word-search
// Puzzle construction lives here so the binary and integration tests share it

pub mod cli;
pub mod errors;
pub mod grid;
pub mod logging;
pub mod palette;
pub mod placement;
pub mod puzzle;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use errors::PuzzleError;
pub use grid::Grid;
pub use palette::LetterPalette;
pub use placement::{Direction, Placement, possible_locations};
pub use puzzle::{Puzzle, PuzzleBuilder};
pub use wordlist::{load_wordlist_from_file, load_wordlist_from_str};
