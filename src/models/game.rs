use serde::{Deserialize, Serialize};

/// Placeholder stored in cells that no word occupies.
/// Filler letters replace it at render time only.
pub const EMPTY_MARKER: char = '_';

/// Flattened cell position, `row * size + col`
pub type CellIndex = usize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a flat index back into a coordinate for a grid of `size` columns
    pub fn from_index(index: CellIndex, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    pub fn to_index(self, size: usize) -> CellIndex {
        self.row * size + self.col
    }

    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

/// A word written into the grid, left to right from `start`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Coordinate,
}

impl Placement {
    /// Cells covered by this placement, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.word.chars().count())
            .map(move |offset| Coordinate::new(self.start.row, self.start.col + offset))
    }
}

/// Square letter grid.
///
/// Cells hold either a placed letter or [`EMPTY_MARKER`]. The grid also
/// remembers where each word landed and which words could not be placed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<char>>,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
}

impl Grid {
    /// Create a `size` x `size` grid with every cell set to the empty marker
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![EMPTY_MARKER; size]; size],
            placements: Vec::new(),
            unplaced: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }

    pub fn get(&self, coord: Coordinate) -> Option<char> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    pub fn is_empty_cell(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(EMPTY_MARKER)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words the generator gave up on
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// Check whether `word` fits at `start` without touching any occupied cell
    pub fn can_place(&self, word: &str, start: Coordinate) -> bool {
        word.chars()
            .enumerate()
            .all(|(offset, _)| self.is_empty_cell(Coordinate::new(start.row, start.col + offset)))
    }

    /// Write `word` at `start`. Callers must check [`Grid::can_place`] first.
    pub(crate) fn place(&mut self, word: &str, start: Coordinate) {
        for (offset, letter) in word.chars().enumerate() {
            self.cells[start.row][start.col + offset] = letter;
        }
        self.placements.push(Placement {
            word: word.to_string(),
            start,
        });
    }

    pub(crate) fn mark_unplaced(&mut self, word: &str) {
        self.unplaced.push(word.to_string());
    }
}

/// Result of confirming the current selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "word", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing was selected
    Empty,
    AlreadyFound(String),
    Correct(String),
    Incorrect,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
}
