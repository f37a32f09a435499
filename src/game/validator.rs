use std::collections::HashSet;

use crate::{
    models::{Coordinate, Grid, Outcome},
    words::WordList,
};

pub struct WordValidator;

impl WordValidator {
    /// Judge a selection against the word list and the words already found.
    /// Never mutates its inputs; the session applies the result.
    pub fn evaluate(
        selection: &[Coordinate],
        grid: &Grid,
        words: &WordList,
        found: &HashSet<String>,
    ) -> Outcome {
        if selection.is_empty() {
            return Outcome::Empty;
        }

        let candidate = Self::extract_word(grid, selection).to_uppercase();

        if found.contains(&candidate) {
            Outcome::AlreadyFound(candidate)
        } else if words.contains(&candidate) {
            Outcome::Correct(candidate)
        } else {
            Outcome::Incorrect
        }
    }

    /// Extract word from grid positions, in selection order.
    /// Positions outside the grid contribute nothing.
    pub fn extract_word(grid: &Grid, positions: &[Coordinate]) -> String {
        positions.iter().filter_map(|pos| grid.get(*pos)).collect()
    }

    /// Every cell where `word` reads left to right in the grid
    pub fn cells_for_word(grid: &Grid, word: &str) -> HashSet<Coordinate> {
        let letters: Vec<char> = word.to_uppercase().chars().collect();
        let size = grid.size();
        let mut cells = HashSet::new();

        if letters.is_empty() || letters.len() > size {
            return cells;
        }

        for (row, line) in grid.rows().iter().enumerate() {
            for col in 0..=size - letters.len() {
                if line.get(col..col + letters.len()) == Some(&letters[..]) {
                    cells.extend((col..col + letters.len()).map(|c| Coordinate::new(row, c)));
                }
            }
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_grid() -> Grid {
        let mut grid = Grid::empty(4);
        grid.place("CAT", Coordinate::new(2, 1));
        grid
    }

    fn cat_cells() -> Vec<Coordinate> {
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3),
        ]
    }

    #[test]
    fn test_empty_selection() {
        let words = WordList::new(["CAT"]).unwrap();
        let outcome = WordValidator::evaluate(&[], &cat_grid(), &words, &HashSet::new());
        assert_eq!(outcome, Outcome::Empty);
    }

    #[test]
    fn test_correct_then_already_found() {
        let grid = cat_grid();
        let words = WordList::new(["CAT"]).unwrap();
        let mut found = HashSet::new();

        let outcome = WordValidator::evaluate(&cat_cells(), &grid, &words, &found);
        assert_eq!(outcome, Outcome::Correct("CAT".to_string()));

        found.insert("CAT".to_string());
        let outcome = WordValidator::evaluate(&cat_cells(), &grid, &words, &found);
        assert_eq!(outcome, Outcome::AlreadyFound("CAT".to_string()));
    }

    #[test]
    fn test_reverse_order_is_incorrect() {
        let grid = cat_grid();
        let words = WordList::new(["CAT"]).unwrap();
        let mut reversed = cat_cells();
        reversed.reverse();

        assert_eq!(WordValidator::extract_word(&grid, &reversed), "TAC");
        assert_eq!(
            WordValidator::evaluate(&reversed, &grid, &words, &HashSet::new()),
            Outcome::Incorrect
        );
    }

    #[test]
    fn test_lowercase_grid_letters_match() {
        // Letters are compared after uppercasing
        let mut grid = Grid::empty(6);
        grid.place("celula", Coordinate::new(0, 0));
        let words = WordList::new(["CELULA"]).unwrap();
        let selection: Vec<_> = (0..6).map(|col| Coordinate::new(0, col)).collect();

        assert_eq!(
            WordValidator::evaluate(&selection, &grid, &words, &HashSet::new()),
            Outcome::Correct("CELULA".to_string())
        );
    }

    #[test]
    fn test_evaluate_is_pure() {
        let grid = cat_grid();
        let words = WordList::new(["CAT"]).unwrap();
        let found = HashSet::new();
        let (grid_before, words_before, found_before) = (grid.clone(), words.clone(), found.clone());

        let first = WordValidator::evaluate(&cat_cells(), &grid, &words, &found);
        let second = WordValidator::evaluate(&cat_cells(), &grid, &words, &found);

        assert_eq!(first, second);
        assert_eq!(grid, grid_before);
        assert_eq!(words, words_before);
        assert_eq!(found, found_before);
    }

    #[test]
    fn test_empty_markers_never_match() {
        let grid = cat_grid();
        let words = WordList::new(["CAT"]).unwrap();
        let selection = vec![Coordinate::new(0, 0), Coordinate::new(0, 1)];
        assert_eq!(WordValidator::extract_word(&grid, &selection), "__");
        assert_eq!(
            WordValidator::evaluate(&selection, &grid, &words, &HashSet::new()),
            Outcome::Incorrect
        );
    }

    #[test]
    fn test_cells_for_word() {
        let grid = cat_grid();
        let cells = WordValidator::cells_for_word(&grid, "cat");
        assert_eq!(cells, cat_cells().into_iter().collect::<HashSet<_>>());
        assert!(WordValidator::cells_for_word(&grid, "DOG").is_empty());
        assert!(WordValidator::cells_for_word(&grid, "CATERPILLAR").is_empty());
    }
}
