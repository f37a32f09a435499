use rand::Rng;

use crate::{
    error::GameError,
    models::{Coordinate, Grid},
    words::WordList,
};

/// Placement attempts per word before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 500;

/// What to do when a word cannot be placed within the retry bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// Leave the word out of the grid and record it as unplaced
    #[default]
    Lenient,
    /// Fail generation with [`GameError::PlacementFailed`]
    Strict,
}

#[derive(Debug, Clone, Copy)]
pub struct GridGenerator {
    pub max_attempts: usize,
    pub policy: PlacementPolicy,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            policy: PlacementPolicy::Lenient,
        }
    }
}

impl GridGenerator {
    pub fn new(max_attempts: usize, policy: PlacementPolicy) -> Self {
        Self {
            max_attempts,
            policy,
        }
    }

    /// Generate a `size` x `size` grid with every word placed horizontally,
    /// left to right, in list order
    pub fn generate(
        &self,
        words: &WordList,
        size: usize,
        rng: &mut impl Rng,
    ) -> Result<Grid, GameError> {
        Self::check_fits(words, size)?;

        let mut grid = Grid::empty(size);

        for word in words.iter() {
            match self.place_word(&mut grid, word, rng) {
                Some(start) => {
                    tracing::debug!("Placed {} at ({}, {})", word, start.row, start.col);
                }
                None if self.policy == PlacementPolicy::Strict => {
                    return Err(GameError::PlacementFailed {
                        word: word.to_string(),
                        attempts: self.max_attempts,
                    });
                }
                None => {
                    tracing::warn!(
                        "Could not place {} after {} attempts, leaving it out",
                        word,
                        self.max_attempts
                    );
                    grid.mark_unplaced(word);
                }
            }
        }

        Ok(grid)
    }

    /// Reject configurations that could never produce a placement
    pub fn check_fits(words: &WordList, size: usize) -> Result<(), GameError> {
        if size == 0 {
            return Err(GameError::InvalidGridSize);
        }

        match words.iter().find(|w| w.chars().count() > size) {
            Some(word) => Err(GameError::WordTooLong {
                word: word.to_string(),
                len: word.chars().count(),
                size,
            }),
            None => Ok(()),
        }
    }

    fn place_word(&self, grid: &mut Grid, word: &str, rng: &mut impl Rng) -> Option<Coordinate> {
        let size = grid.size();
        let max_start = size - word.chars().count();

        for _ in 0..self.max_attempts {
            let start = Coordinate::new(rng.random_range(0..size), rng.random_range(0..=max_start));
            if grid.can_place(word, start) {
                grid.place(word, start);
                return Some(start);
            }
        }

        None
    }
}
