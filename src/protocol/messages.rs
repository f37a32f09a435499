use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, GameStatus};

/// Messages sent from the client to the game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewGame,
    SelectCell {
        row: usize,
        col: usize,
    },
    ConfirmSelection,
    ClearSelection,
    GetState,
}

/// Messages sent from the game to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState {
        size: usize,
        /// Rows as the player sees them, filler included
        rows: Vec<String>,
        words: Vec<WordInfo>,
        selection: Vec<Coordinate>,
        found_cells: Vec<Coordinate>,
        status: GameStatus,
    },
    SelectionUpdated {
        selection: Vec<Coordinate>,
    },
    WordFound {
        word: String,
        cells: Vec<Coordinate>,
    },
    AlreadyFound {
        word: String,
    },
    IncorrectWord {
        cells: Vec<Coordinate>,
    },
    NothingSelected,
    GameWon,
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordInfo {
    pub word: String,
    pub found: bool,
}
