use thiserror::Error;

/// Errors raised while building a puzzle.
///
/// Every variant describes an invalid argument. A word that cannot be placed
/// is not an error: placement just stops there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid argument: word list is empty")]
    EmptyWordList,

    #[error("invalid argument: word at position {index} is empty")]
    EmptyWord { index: usize },

    #[error("invalid argument: no words were placed, so there are no letters to fill the grid with")]
    EmptyPalette,
}

impl PuzzleError {
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyWordList | Self::EmptyWord { .. } | Self::EmptyPalette
        )
    }
}
