use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::palette::LetterPalette;
use crate::placement::{Placement, possible_locations};
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A finished word search: every cell holds a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<String>,
}

impl Puzzle {
    /// Builds a puzzle using the thread-local random generator.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, PuzzleError> {
        Self::generate(words, &mut rand::thread_rng())
    }

    /// Builds a puzzle that is identical for identical `words` and `seed`.
    pub fn from_seed<S: AsRef<str>>(words: &[S], seed: u64) -> Result<Self, PuzzleError> {
        Self::generate(words, &mut StdRng::seed_from_u64(seed))
    }

    pub fn generate<S, R>(words: &[S], rng: &mut R) -> Result<Self, PuzzleError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        PuzzleBuilder::new(words)?.build(rng)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Uppercased words that made it into the grid, in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

/// Owns the grid while words are placed and blanks are filled.
///
/// Placement is fail-fast: the first word with no valid location ends the
/// placement phase, and neither it nor any later word is added.
#[derive(Debug)]
pub struct PuzzleBuilder {
    grid: Grid,
    pending: Vec<Vec<char>>,
    next: usize,
    placed: Vec<String>,
    stopped: bool,
}

impl PuzzleBuilder {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        if let Some(index) = words.iter().position(|w| w.as_ref().is_empty()) {
            return Err(PuzzleError::EmptyWord { index });
        }

        let pending: Vec<Vec<char>> = words
            .iter()
            .map(|w| w.as_ref().to_uppercase().chars().collect())
            .collect();
        let longest = pending.iter().map(Vec::len).max().unwrap_or(0);
        let size = longest + 1;
        debug_log!("Grid size {} for {} words", size, pending.len());

        Ok(Self {
            grid: Grid::new(size),
            pending,
            next: 0,
            placed: Vec::new(),
            stopped: false,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Places every word, then fills the remaining cells from the palette of
    /// placed letters.
    pub fn build<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<Puzzle, PuzzleError> {
        while self.place_next(rng).is_some() {}
        self.fill(rng)
    }

    /// Places the next pending word and returns where it went. Returns `None`
    /// once the list is exhausted or a word could not be placed.
    fn place_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Placement> {
        if self.stopped {
            return None;
        }
        let word = self.pending.get(self.next)?;

        let locations = possible_locations(word, &self.grid);
        let Some(&placement) = locations.choose(rng) else {
            info_log!(
                "No room for {} in {}x{} grid, skipping it and {} later words",
                word.iter().collect::<String>(),
                self.size(),
                self.size(),
                self.pending.len() - self.next - 1
            );
            self.stopped = true;
            return None;
        };
        debug_log!(
            "Placing word {} of {} at {:?} ({} candidates)",
            self.next + 1,
            self.pending.len(),
            placement,
            locations.len()
        );

        placement.write(word, &mut self.grid);
        self.placed.push(word.iter().collect());
        self.next += 1;
        Some(placement)
    }

    fn fill<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<Puzzle, PuzzleError> {
        let palette = LetterPalette::from_words(&self.placed);
        debug_log!(
            "Filling {} blank cells from {} letters",
            self.grid.empty_cells(),
            palette.len()
        );
        let sampler = palette.sampler()?;

        let size = self.size();
        for x in 0..size {
            for y in 0..size {
                if self.grid.get(x, y).is_none() {
                    self.grid.set(x, y, sampler.draw(rng));
                }
            }
        }

        Ok(Puzzle {
            grid: self.grid,
            words: self.placed,
        })
    }
}
