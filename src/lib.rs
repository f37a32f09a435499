//! Single-player word search: a square grid hiding a list of words placed
//! left to right, with click-order selection and word validation.
//!
//! [`GameSession`] is the entry point. The [`protocol`] module wraps a session
//! in a line-oriented JSON front end.

pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod models;
pub mod protocol;
pub mod utils;
pub mod words;

pub use error::GameError;
pub use game::{Confirmation, GameSession, GridGenerator, PlacementPolicy, WordValidator};
pub use models::{CellIndex, Coordinate, GameStatus, Grid, Outcome, EMPTY_MARKER};
pub use words::WordList;
