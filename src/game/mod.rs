// Puzzle engine: grid generation, selection tracking, word validation and
// the session that ties them together

pub mod grid;
pub mod selection;
pub mod session;
pub mod validator;

pub use grid::{GridGenerator, PlacementPolicy, DEFAULT_MAX_ATTEMPTS};
pub use selection::SelectionTracker;
pub use session::{Confirmation, GameSession};
pub use validator::WordValidator;
