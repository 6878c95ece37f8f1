//! Computer opponent facade
//!
//! Wraps the searcher and reports timing and node statistics alongside
//! the chosen move, for display in the UI's debug card. The search depth
//! is fixed; see [`crate::search::SEARCH_DEPTH`].

use std::time::Instant;

use crate::board::{Board, MarkAssignment, Pos};
use crate::search::Searcher;

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the chosen move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Computer opponent.
///
/// # Example
///
/// ```
/// use tictactorus::{AiEngine, Board, MarkAssignment, Player, Pos};
///
/// let mut board = Board::new();
/// let marks = MarkAssignment::default();
/// board.apply(Pos::new(2, 2), marks.mark_of(Player::Human));
///
/// let mut engine = AiEngine::new();
/// if let Some(pos) = engine.get_move(&board, &marks) {
///     board.apply(pos, marks.mark_of(Player::Computer));
/// }
/// ```
pub struct AiEngine {
    searcher: Searcher,
}

impl AiEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Get the best move for the computer.
    ///
    /// Returns `None` iff the board has no empty cell; callers must check
    /// before applying the move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, marks: &MarkAssignment) -> Option<Pos> {
        self.get_move_with_stats(board, marks).best_move
    }

    /// Get the best move together with timing and node statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, marks: &MarkAssignment) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, marks);
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.nodes,
        }
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
