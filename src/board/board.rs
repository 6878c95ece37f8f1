//! Board structure and move application

use super::{Mark, Pos, TOTAL_CELLS};

/// 6x6 game grid. Created empty, never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()] == Mark::Empty
    }

    /// Apply a move: set `pos` to `mark` if the cell is empty.
    ///
    /// Returns `false` and changes nothing when the cell is occupied.
    pub fn apply(&mut self, pos: Pos, mark: Mark) -> bool {
        let idx = pos.to_index();
        if self.cells[idx] != Mark::Empty {
            return false;
        }
        self.cells[idx] = mark;
        true
    }

    /// Place a mark without the occupancy check.
    ///
    /// The search pairs this with `remove_mark` to explore and undo
    /// hypothetical placements.
    #[inline]
    pub fn place_mark(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Clear a cell
    #[inline]
    pub fn remove_mark(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = Mark::Empty;
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Mark::Empty)
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != Mark::Empty).count() as u32
    }

    /// Set every cell back to empty
    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; TOTAL_CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
