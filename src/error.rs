use thiserror::Error;

use crate::models::Coordinate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("grid size must be at least 1")]
    InvalidGridSize,

    #[error("word '{word}' has {len} letters but the grid is only {size} wide")]
    WordTooLong { word: String, len: usize, size: usize },

    #[error("word list contains '{0}' more than once")]
    DuplicateWord(String),

    #[error("word list contains an empty word")]
    EmptyWord,

    #[error("word '{word}' contains '{letter}', only letters are allowed")]
    InvalidCharacter { word: String, letter: char },

    #[error("could not place '{word}' after {attempts} attempts")]
    PlacementFailed { word: String, attempts: usize },

    #[error("cell ({}, {}) is outside the {size}x{size} grid", .coord.row, .coord.col)]
    CoordinateOutOfRange { coord: Coordinate, size: usize },

    #[error("the game is already won, start a new game")]
    GameAlreadyWon,
}
