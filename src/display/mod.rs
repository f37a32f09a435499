use rand::Rng;

use crate::{
    models::{Coordinate, Grid, EMPTY_MARKER},
    utils::letters::random_letter,
};

/// Display-only letters shown in cells no word occupies.
///
/// Drawn once per game so every re-render shows the same background.
/// Never fed back into the grid, so validation only ever sees the
/// empty marker in those cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerLetters {
    size: usize,
    letters: Vec<char>,
}

impl FillerLetters {
    pub fn generate(size: usize, rng: &mut impl Rng) -> Self {
        Self {
            size,
            letters: (0..size * size).map(|_| random_letter(rng)).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, coord: Coordinate) -> Option<char> {
        if !coord.in_bounds(self.size) {
            return None;
        }
        self.letters.get(coord.to_index(self.size)).copied()
    }

    /// The letter a player sees at `coord`
    pub fn display_letter(&self, grid: &Grid, coord: Coordinate) -> char {
        match grid.get(coord) {
            Some(EMPTY_MARKER) | None => self.get(coord).unwrap_or(EMPTY_MARKER),
            Some(letter) => letter,
        }
    }

    /// Render every row with empty markers swapped for filler
    pub fn render_rows(&self, grid: &Grid) -> Vec<String> {
        (0..grid.size())
            .map(|row| {
                (0..grid.size())
                    .map(|col| self.display_letter(grid, Coordinate::new(row, col)))
                    .collect()
            })
            .collect()
    }
}
