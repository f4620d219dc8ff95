use crate::errors::PuzzleError;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

/// Letter frequencies over every placed word, used to fill blank cells.
///
/// Letters keep the order in which they were first seen so a seeded fill is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterPalette {
    counts: Vec<(char, usize)>,
    total: usize,
}

impl LetterPalette {
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut palette = Self::default();
        for letter in words.iter().flat_map(|w| w.as_ref().chars()) {
            match palette.counts.iter_mut().find(|(c, _)| *c == letter) {
                Some((_, count)) => *count += 1,
                None => palette.counts.push((letter, 1)),
            }
            palette.total += 1;
        }
        palette
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct letters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.iter().map(|(c, _)| *c)
    }

    /// Share of `letter` among all tallied letters, zero when absent.
    pub fn weight(&self, letter: char) -> f64 {
        self.counts
            .iter()
            .find(|(c, _)| *c == letter)
            .map_or(0.0, |(_, count)| *count as f64 / self.total as f64)
    }

    /// Builds the weighted distribution the fill phase draws from.
    pub fn sampler(&self) -> Result<PaletteSampler, PuzzleError> {
        let weights = self.counts.iter().map(|(c, _)| self.weight(*c));
        let index = WeightedIndex::new(weights).map_err(|_| PuzzleError::EmptyPalette)?;
        Ok(PaletteSampler {
            letters: self.letters().collect(),
            index,
        })
    }
}

pub struct PaletteSampler {
    letters: Vec<char>,
    index: WeightedIndex<f64>,
}

impl PaletteSampler {
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.letters[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_counts_letters_across_words() {
        let palette = LetterPalette::from_words(&["CAT", "DOG", "TOT"]);
        assert_eq!(palette.len(), 6);
        assert!(!palette.is_empty());
        assert!((palette.weight('T') - 3.0 / 9.0).abs() < f64::EPSILON);
        assert!((palette.weight('O') - 2.0 / 9.0).abs() < f64::EPSILON);
        assert_eq!(palette.weight('Z'), 0.0);
    }

    #[test]
    fn test_letters_in_first_seen_order() {
        let palette = LetterPalette::from_words(&["BAB", "CAB"]);
        let letters: Vec<char> = palette.letters().collect();
        assert_eq!(letters, vec!['B', 'A', 'C']);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let palette = LetterPalette::from_words(&["HELLO", "WORLD"]);
        let sum: f64 = palette.letters().map(|c| palette.weight(c)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_palette_cannot_sample() {
        let palette = LetterPalette::from_words::<&str>(&[]);
        assert!(palette.is_empty());
        assert!(matches!(palette.sampler(), Err(PuzzleError::EmptyPalette)));
    }

    #[test]
    fn test_single_letter_always_drawn() {
        let palette = LetterPalette::from_words(&["AAAA"]);
        let sampler = palette.sampler().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert!((0..100).all(|_| sampler.draw(&mut rng) == 'A'));
    }

    #[test]
    fn test_draws_only_palette_letters() {
        let palette = LetterPalette::from_words(&["CAT", "DOG"]);
        let sampler = palette.sampler().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!("CATDOG".contains(sampler.draw(&mut rng)));
        }
    }
}
