//! Win condition checking on the wrap-around board
//!
//! A win is three consecutive equal marks along one of four directions.
//! Indexing is modular on both axes, so cells on one edge are adjacent to
//! cells on the opposite edge: row 5 sits directly above row 0 and the
//! diagonals wrap the same way. Most near-win edge cases come from this
//! topology.

use crate::board::{Board, Mark, MarkAssignment, Player, Pos, TOTAL_CELLS};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Row
    (1, 0),  // Column
    (1, -1), // Right diagonal
    (1, 1),  // Left diagonal
];

/// A winning line: the owning participant and the three cells forming it,
/// ordered (offset cell, center cell, opposite offset cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub winner: Player,
    pub line: [Pos; 3],
}

/// Check for a winner.
///
/// Scans every cell in row-major order; for each occupied cell, tests the
/// four directions in declaration order by comparing both wrap-around
/// neighbors of the cell. The first matching triple is returned, which
/// keeps the result deterministic when several winning lines coexist.
///
/// The check is stateless: each call inspects the grid fresh.
pub fn check_winner(board: &Board, marks: &MarkAssignment) -> Option<WinLine> {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        let mark = board.get(pos);
        if mark == Mark::Empty {
            continue;
        }
        let winner = match marks.owner_of(mark) {
            Some(player) => player,
            None => continue,
        };
        for &(dr, dc) in &DIRECTIONS {
            let before = pos.wrapping_offset(-dr, -dc);
            let after = pos.wrapping_offset(dr, dc);
            if board.get(before) == mark && board.get(after) == mark {
                return Some(WinLine {
                    winner,
                    line: [before, pos, after],
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, mark: Mark, cells: &[(u8, u8)]) {
        for &(row, col) in cells {
            board.place_mark(Pos::new(row, col), mark);
        }
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::new();
        let marks = MarkAssignment::default();
        assert_eq!(check_winner(&board, &marks), None);
    }

    #[test]
    fn test_single_mark_is_not_a_win() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        assert!(board.apply(Pos::new(3, 3), marks.mark_of(Player::Human)));
        assert_eq!(check_winner(&board, &marks), None);
        assert!(!board.is_full());
    }

    #[test]
    fn test_row_win() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Nought, &[(2, 1), (2, 2), (2, 3)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Human);
        assert_eq!(
            win.line,
            [Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3)]
        );
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Cross, &[(1, 4), (2, 4), (3, 4)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Computer);
        assert_eq!(
            win.line,
            [Pos::new(1, 4), Pos::new(2, 4), Pos::new(3, 4)]
        );
    }

    #[test]
    fn test_right_diagonal_win() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Cross, &[(1, 4), (2, 3), (3, 2)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Computer);
        assert_eq!(
            win.line,
            [Pos::new(1, 4), Pos::new(2, 3), Pos::new(3, 2)]
        );
    }

    #[test]
    fn test_left_diagonal_win() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Nought, &[(1, 1), (2, 2), (3, 3)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Human);
        assert_eq!(
            win.line,
            [Pos::new(1, 1), Pos::new(2, 2), Pos::new(3, 3)]
        );
    }

    #[test]
    fn test_column_wraps_across_top_edge() {
        // Row 5 is the modular neighbor of row 0, so (5,2)-(0,2)-(1,2)
        // is a winning column even though it straddles the board edge.
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Cross, &[(0, 2), (1, 2), (5, 2)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Computer);
        assert_eq!(
            win.line,
            [Pos::new(5, 2), Pos::new(0, 2), Pos::new(1, 2)]
        );
    }

    #[test]
    fn test_row_wraps_across_side_edge() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Nought, &[(3, 4), (3, 5), (3, 0)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Human);
        // First satisfying triple is centered on (3,5).
        assert_eq!(
            win.line,
            [Pos::new(3, 4), Pos::new(3, 5), Pos::new(3, 0)]
        );
    }

    #[test]
    fn test_diagonal_wraps_across_corner() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Cross, &[(5, 5), (0, 0), (1, 1)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Computer);
        assert_eq!(
            win.line,
            [Pos::new(5, 5), Pos::new(0, 0), Pos::new(1, 1)]
        );
    }

    #[test]
    fn test_two_marks_do_not_win() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Cross, &[(0, 0), (0, 1)]);
        assert_eq!(check_winner(&board, &marks), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Cross, &[(2, 1), (2, 3)]);
        place(&mut board, Mark::Nought, &[(2, 2)]);
        assert_eq!(check_winner(&board, &marks), None);
    }

    #[test]
    fn test_scan_order_breaks_ties_between_lines() {
        // Both players have a complete line; the one whose center comes
        // first in row-major order is reported.
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(&mut board, Mark::Nought, &[(1, 0), (1, 1), (1, 2)]);
        place(&mut board, Mark::Cross, &[(4, 0), (4, 1), (4, 2)]);

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(win.winner, Player::Human);
        assert_eq!(
            win.line,
            [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]
        );
    }

    #[test]
    fn test_direction_order_breaks_ties_at_one_cell() {
        // (2,2) centers both a row and a column line; the row direction
        // is tested first.
        let mut board = Board::new();
        let marks = MarkAssignment::default();
        place(
            &mut board,
            Mark::Cross,
            &[(2, 1), (2, 2), (2, 3), (1, 2), (3, 2)],
        );

        let win = check_winner(&board, &marks).unwrap();
        assert_eq!(
            win.line,
            [Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3)]
        );
    }
}
