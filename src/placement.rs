use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
    /// Top-left to bottom-right.
    Diagonal,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Across, Direction::Down, Direction::Diagonal];

    /// Column and row step for one letter.
    fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
            Direction::Diagonal => (1, 1),
        }
    }
}

/// Where a word starts and which way it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Coordinates of the `len` cells covered from the starting point.
    pub fn cells(self, len: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dx, dy) = self.direction.step();
        (0..len).map(move |i| (self.x + i * dx, self.y + i * dy))
    }

    pub fn fits(&self, word: &[char], grid: &Grid) -> bool {
        self.cells(word.len())
            .zip(word)
            .all(|((x, y), &letter)| grid.accepts(x, y, letter))
    }

    pub fn write(&self, word: &[char], grid: &mut Grid) {
        for ((x, y), &letter) in self.cells(word.len()).zip(word) {
            grid.set(x, y, letter);
        }
    }
}

/// Every placement of `word` that stays inside `grid` without contradicting
/// letters already written.
///
/// Across keeps `x < size - len` on every row, down keeps `y < size - len` on
/// every column, and diagonal restricts both axes. Candidates come out across
/// first, then down, then diagonal, each scanned row by row.
pub fn possible_locations(word: &[char], grid: &Grid) -> Vec<Placement> {
    let size = grid.size();
    let span = size.saturating_sub(word.len());
    let mut locations = Vec::new();

    for direction in Direction::ALL {
        let (x_end, y_end) = match direction {
            Direction::Across => (span, size),
            Direction::Down => (size, span),
            Direction::Diagonal => (span, span),
        };
        for y in 0..y_end {
            for x in 0..x_end {
                let candidate = Placement::new(x, y, direction);
                if candidate.fits(word, grid) {
                    locations.push(candidate);
                }
            }
        }
    }

    locations
}
