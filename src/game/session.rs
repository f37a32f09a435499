use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{GridGenerator, PlacementPolicy, SelectionTracker, WordValidator};
use crate::{
    error::GameError,
    models::{CellIndex, Coordinate, GameStatus, Grid, Outcome},
    words::WordList,
};

/// How many fresh grids a strict session tries before giving up
pub const MAX_GRID_REGENERATIONS: usize = 20;

/// What happened when the player confirmed a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub outcome: Outcome,
    pub status: GameStatus,
}

impl Confirmation {
    pub fn game_won(&self) -> bool {
        matches!(self.outcome, Outcome::Correct(_)) && self.status == GameStatus::Won
    }
}

/// One player's puzzle: the grid, the words to find and the progress so far
pub struct GameSession<R: Rng = StdRng> {
    words: WordList,
    size: usize,
    generator: GridGenerator,
    rng: R,
    grid: Grid,
    found: HashSet<String>,
    selection: SelectionTracker,
    /// Cells of the last rejected selection, kept for one intent
    flagged: Vec<Coordinate>,
}

impl GameSession<StdRng> {
    /// Session with the default generator, seeded from the thread RNG
    pub fn with_defaults(words: WordList, size: usize) -> Result<Self, GameError> {
        Self::new(
            words,
            size,
            GridGenerator::default(),
            StdRng::from_rng(&mut rand::rng()),
        )
    }
}

impl<R: Rng> GameSession<R> {
    /// Validate the configuration and deal the first grid
    pub fn new(
        words: WordList,
        size: usize,
        generator: GridGenerator,
        rng: R,
    ) -> Result<Self, GameError> {
        GridGenerator::check_fits(&words, size)?;

        let mut session = Self {
            words,
            size,
            generator,
            rng,
            grid: Grid::empty(size),
            found: HashSet::new(),
            selection: SelectionTracker::new(),
            flagged: Vec::new(),
        };
        session.start_new_game()?;

        Ok(session)
    }

    /// Throw away the current grid and progress and deal a fresh puzzle
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        let attempts = match self.generator.policy {
            PlacementPolicy::Lenient => 1,
            PlacementPolicy::Strict => MAX_GRID_REGENERATIONS,
        };

        let mut last_error = None;
        for attempt in 1..=attempts {
            match self.generator.generate(&self.words, self.size, &mut self.rng) {
                Ok(grid) => {
                    self.grid = grid;
                    self.found.clear();
                    self.selection.clear();
                    self.flagged.clear();

                    tracing::info!(
                        "New game: {}x{} grid, {} words ({} unplaced)",
                        self.size,
                        self.size,
                        self.words.len(),
                        self.grid.unplaced().len()
                    );
                    return Ok(());
                }
                Err(e @ GameError::PlacementFailed { .. }) => {
                    tracing::debug!("Grid attempt {} failed: {}", attempt, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        let err = last_error.unwrap_or(GameError::InvalidGridSize);
        tracing::error!("Giving up after {} grids: {}", attempts, err);
        Err(err)
    }

    /// Toggle a cell in the current selection
    pub fn select_cell(&mut self, coord: Coordinate) -> Result<&[Coordinate], GameError> {
        if !coord.in_bounds(self.size) {
            return Err(GameError::CoordinateOutOfRange {
                coord,
                size: self.size,
            });
        }
        if self.status() == GameStatus::Won {
            return Err(GameError::GameAlreadyWon);
        }

        self.flagged.clear();
        Ok(self.selection.toggle(coord))
    }

    pub fn select_index(&mut self, index: CellIndex) -> Result<&[Coordinate], GameError> {
        if index >= self.size * self.size {
            return Err(GameError::CoordinateOutOfRange {
                coord: Coordinate::from_index(index, self.size),
                size: self.size,
            });
        }
        self.select_cell(Coordinate::from_index(index, self.size))
    }

    /// Check the current selection and apply the result
    pub fn confirm_selection(&mut self) -> Confirmation {
        self.flagged.clear();

        let outcome =
            WordValidator::evaluate(self.selection.as_slice(), &self.grid, &self.words, &self.found);

        match &outcome {
            Outcome::Empty => tracing::debug!("Confirm with nothing selected"),
            Outcome::AlreadyFound(word) => tracing::debug!("{} was already found", word),
            Outcome::Incorrect => {
                tracing::debug!(
                    "Rejected selection {:?}",
                    WordValidator::extract_word(&self.grid, self.selection.as_slice())
                );
                self.flagged = self.selection.as_slice().to_vec();
            }
            Outcome::Correct(word) => {
                self.found.insert(word.clone());
                self.selection.clear();
                tracing::info!(
                    "Found {} ({}/{})",
                    word,
                    self.found.len(),
                    self.words.len()
                );
            }
        }

        let status = self.status();
        if status == GameStatus::Won && matches!(outcome, Outcome::Correct(_)) {
            tracing::info!("All words found, game won");
        }

        Confirmation { outcome, status }
    }

    /// Drop the current selection. Does nothing once the game is won.
    pub fn clear_selection(&mut self) {
        if self.status() == GameStatus::Won {
            return;
        }
        self.flagged.clear();
        self.selection.clear();
    }

    pub fn status(&self) -> GameStatus {
        if self.found.len() == self.words.len() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    pub fn found_words(&self) -> &HashSet<String> {
        &self.found
    }

    pub fn selection(&self) -> &[Coordinate] {
        self.selection.as_slice()
    }

    /// Cells of the last incorrect selection, until the next intent
    pub fn flagged_cells(&self) -> &[Coordinate] {
        &self.flagged
    }

    pub fn unplaced_words(&self) -> &[String] {
        self.grid.unplaced()
    }

    /// Every cell belonging to a found word
    pub fn found_cells(&self) -> HashSet<Coordinate> {
        self.found
            .iter()
            .flat_map(|word| WordValidator::cells_for_word(&self.grid, word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(words: &[&str], size: usize, seed: u64) -> GameSession {
        GameSession::new(
            WordList::new(words.iter().copied()).unwrap(),
            size,
            GridGenerator::default(),
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn cells_of(session: &GameSession, word: &str) -> Vec<Coordinate> {
        let placement = session
            .grid()
            .placements()
            .iter()
            .find(|p| p.word == word)
            .expect("word should be placed");
        placement.cells().collect()
    }

    #[test]
    fn test_cat_scenario() {
        let mut game = session(&["CAT"], 4, 11);
        let cells = cells_of(&game, "CAT");
        assert!(cells[0].col <= 1, "CAT must start in column 0 or 1");

        for cell in &cells {
            game.select_cell(*cell).unwrap();
        }
        let confirmation = game.confirm_selection();

        assert_eq!(confirmation.outcome, Outcome::Correct("CAT".to_string()));
        assert_eq!(confirmation.status, GameStatus::Won);
        assert!(confirmation.game_won());
        assert_eq!(game.found_words().len(), 1);
        assert!(game.found_words().contains("CAT"));
        assert!(game.selection().is_empty());
        assert_eq!(game.found_cells(), cells.into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_reverse_selection_is_incorrect_and_kept() {
        let mut game = session(&["CAT"], 4, 11);
        let mut cells = cells_of(&game, "CAT");
        cells.reverse();

        for cell in &cells {
            game.select_cell(*cell).unwrap();
        }
        let confirmation = game.confirm_selection();

        assert_eq!(confirmation.outcome, Outcome::Incorrect);
        assert_eq!(confirmation.status, GameStatus::Playing);
        assert_eq!(game.selection(), cells.as_slice());
        assert_eq!(game.flagged_cells(), cells.as_slice());
        assert!(game.found_words().is_empty());

        // Flag lasts until the next intent
        game.clear_selection();
        assert!(game.flagged_cells().is_empty());
        assert!(game.selection().is_empty());
    }

    #[test]
    fn test_empty_confirm() {
        let mut game = session(&["CAT"], 4, 5);
        let confirmation = game.confirm_selection();
        assert_eq!(confirmation.outcome, Outcome::Empty);
        assert_eq!(confirmation.status, GameStatus::Playing);
        assert!(game.found_words().is_empty());
    }

    #[test]
    fn test_already_found_keeps_selection() {
        let mut game = session(&["CAT", "DOG"], 6, 2);
        let cat = cells_of(&game, "CAT");

        for cell in &cat {
            game.select_cell(*cell).unwrap();
        }
        assert_eq!(
            game.confirm_selection().outcome,
            Outcome::Correct("CAT".to_string())
        );

        for cell in &cat {
            game.select_cell(*cell).unwrap();
        }
        let confirmation = game.confirm_selection();
        assert_eq!(confirmation.outcome, Outcome::AlreadyFound("CAT".to_string()));
        assert_eq!(game.selection(), cat.as_slice());
        assert_eq!(game.found_words().len(), 1);
    }

    #[test]
    fn test_win_after_every_word() {
        let words = ["CELULA", "ADN", "NUCLEO", "CITOPLASMA", "ENZIMA", "CLOROFILA"];
        let mut played = 0;
        for seed in 0..10 {
            let mut game = session(&words, 10, seed);
            if !game.unplaced_words().is_empty() {
                continue;
            }
            played += 1;

            for (i, word) in words.iter().enumerate() {
                assert_eq!(game.status(), GameStatus::Playing);
                for cell in cells_of(&game, word) {
                    game.select_cell(cell).unwrap();
                }
                let confirmation = game.confirm_selection();
                assert_eq!(confirmation.outcome, Outcome::Correct(word.to_string()));
                assert_eq!(confirmation.game_won(), i == words.len() - 1);
            }
            assert_eq!(game.status(), GameStatus::Won);
        }
        assert!(played > 0, "every seed left a word unplaced");
    }

    #[test]
    fn test_won_session_rejects_intents() {
        let mut game = session(&["CAT"], 4, 8);
        for cell in cells_of(&game, "CAT") {
            game.select_cell(cell).unwrap();
        }
        game.confirm_selection();
        assert_eq!(game.status(), GameStatus::Won);

        assert_eq!(
            game.select_cell(Coordinate::new(0, 0)).unwrap_err(),
            GameError::GameAlreadyWon
        );
        game.clear_selection();
        assert!(game.selection().is_empty());
        assert_eq!(game.confirm_selection().outcome, Outcome::Empty);

        game.start_new_game().unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.found_words().is_empty());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut game = session(&["CAT"], 4, 1);
        game.select_cell(Coordinate::new(0, 0)).unwrap();

        let err = game.select_cell(Coordinate::new(4, 0)).unwrap_err();
        assert_eq!(
            err,
            GameError::CoordinateOutOfRange {
                coord: Coordinate::new(4, 0),
                size: 4
            }
        );
        assert!(game.select_index(16).is_err());
        assert_eq!(game.selection(), &[Coordinate::new(0, 0)]);
    }

    #[test]
    fn test_select_index() {
        let mut game = session(&["CAT"], 4, 1);
        let selection = game.select_index(6).unwrap();
        assert_eq!(selection, &[Coordinate::new(1, 2)]);
    }

    #[test]
    fn test_new_game_resets_progress() {
        let mut game = session(&["CAT", "DOG"], 5, 4);
        for cell in cells_of(&game, "CAT") {
            game.select_cell(cell).unwrap();
        }
        game.confirm_selection();
        game.select_cell(Coordinate::new(0, 0)).unwrap();

        game.start_new_game().unwrap();
        assert!(game.found_words().is_empty());
        assert!(game.selection().is_empty());
        assert_eq!(game.grid().placements().len(), 2);
    }

    #[test]
    fn test_empty_word_list_is_won() {
        let game = session(&[], 4, 1);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_word_too_long_rejected_up_front() {
        let result = GameSession::new(
            WordList::new(["CITOPLASMA"]).unwrap(),
            4,
            GridGenerator::default(),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(GameError::WordTooLong { .. })));
    }

    #[test]
    fn test_strict_session_surfaces_placement_failure() {
        let result = GameSession::new(
            WordList::new(["AB", "CD", "EF"]).unwrap(),
            2,
            GridGenerator::new(10, PlacementPolicy::Strict),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(GameError::PlacementFailed { .. })));
    }

    #[test]
    fn test_strict_session_places_everything() {
        let game = GameSession::new(
            WordList::new(["CELULA", "ADN", "NUCLEO", "CITOPLASMA", "ENZIMA", "CLOROFILA"]).unwrap(),
            10,
            GridGenerator::new(500, PlacementPolicy::Strict),
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        assert!(game.unplaced_words().is_empty());
        assert_eq!(game.grid().placements().len(), 6);
    }
}
