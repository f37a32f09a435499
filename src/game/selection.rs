use crate::models::Coordinate;

/// Cells the player has clicked, in click order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    cells: Vec<Coordinate>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `coord` if it is not selected, otherwise remove it.
    /// Remaining cells keep their relative order.
    pub fn toggle(&mut self, coord: Coordinate) -> &[Coordinate] {
        match self.cells.iter().position(|c| *c == coord) {
            Some(index) => {
                self.cells.remove(index);
            }
            None => self.cells.push(coord),
        }
        &self.cells
    }

    pub fn clear(&mut self) -> &[Coordinate] {
        self.cells.clear();
        &self.cells
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
