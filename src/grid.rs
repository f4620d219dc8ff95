use std::fmt;

const EMPTY_CELL: char = '.';

/// Square grid of optional letters, addressed as `(x, y)` with `y` the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<Option<char>>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            rows: vec![vec![None; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(x, y)`, or `None` when it is empty or out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x).copied().flatten())
    }

    /// Panics if `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, letter: char) {
        self.rows[y][x] = Some(letter);
    }

    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.rows
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_some)
    }

    pub fn empty_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_none()).count()
    }

    /// A letter may go into a cell that is empty or already holds that letter.
    pub fn accepts(&self, x: usize, y: usize, letter: char) -> bool {
        match self.rows.get(y).and_then(|row| row.get(x)) {
            Some(None) => true,
            Some(Some(existing)) => *existing == letter,
            None => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3);
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.empty_cells(), 9);
        assert!(!grid.is_full());
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_set_and_get_use_x_as_column() {
        let mut grid = Grid::new(3);
        grid.set(2, 0, 'Q');
        assert_eq!(grid.get(2, 0), Some('Q'));
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.rows()[0][2], Some('Q'));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 5), None);
    }

    #[test]
    fn test_accepts_empty_or_matching_letter() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, 'A');
        assert!(grid.accepts(0, 0, 'A'));
        assert!(!grid.accepts(0, 0, 'B'));
        assert!(grid.accepts(1, 1, 'B'));
        assert!(!grid.accepts(2, 1, 'B'));
    }

    #[test]
    fn test_render_empty_cells_as_dots() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, 'A');
        grid.set(1, 1, 'B');
        assert_eq!(grid.to_string(), "A .\n. B");
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let grid = Grid::new(3);
        let text = grid.to_string();
        assert!(!text.ends_with('\n'));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new(2);
        for y in 0..2 {
            for x in 0..2 {
                grid.set(x, y, 'Z');
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.empty_cells(), 0);
    }
}
