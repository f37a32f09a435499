pub mod game;

pub use game::{
    // Board types
    CellIndex, Coordinate, Grid, Placement, EMPTY_MARKER,
    // Session state
    GameStatus, Outcome,
};
