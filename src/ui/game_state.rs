//! Game state management for the GUI
//!
//! Owns the board, the running score and the round lifecycle. The
//! computer's reply is computed synchronously from the input path: the
//! search is bounded (36 cells, 3 plies) and finishes well inside a
//! frame, so there is no worker thread and nothing to cancel.

use std::time::{Duration, Instant};

use crate::board::{Board, MarkAssignment, Player, Pos};
use crate::engine::{AiEngine, MoveResult};
use crate::rules::{check_winner, WinLine};

/// How long a concluded round stays on screen before the board clears.
pub const RESULT_DISPLAY: Duration = Duration::from_secs(2);

/// Outcome of a concluded round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win(WinLine),
    Draw,
}

/// Running score across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub human: u32,
    pub computer: u32,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub marks: MarkAssignment,
    pub current_turn: Player,
    pub scores: Scores,
    pub round: u32,
    pub round_over: Option<RoundOutcome>,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    result_since: Option<Instant>,
    engine: AiEngine,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            marks: MarkAssignment::default(),
            current_turn: Player::Human,
            scores: Scores::default(),
            round: 1,
            round_over: None,
            last_move: None,
            last_ai_result: None,
            message: None,
            result_since: None,
            engine: AiEngine::new(),
        }
    }

    /// The winning line of the current round, if it ended in a win.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinLine> {
        match self.round_over {
            Some(RoundOutcome::Win(win)) => Some(win),
            _ => None,
        }
    }

    /// Attempt the human's move at the given cell.
    ///
    /// On success the round state is resolved and, if the round is still
    /// live, the computer replies before this returns.
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.round_over.is_some() {
            return Err("Round is over".to_string());
        }
        if self.current_turn != Player::Human {
            return Err("Not your turn".to_string());
        }
        if !self.board.apply(pos, self.marks.mark_of(Player::Human)) {
            return Err("Cell is already taken".to_string());
        }

        self.last_move = Some(pos);
        self.message = None;

        if self.conclude_if_over() {
            return Ok(());
        }

        self.current_turn = Player::Computer;
        self.computer_reply();
        Ok(())
    }

    /// Compute and apply the computer's move, blocking until done.
    fn computer_reply(&mut self) {
        let result = self.engine.get_move_with_stats(&self.board, &self.marks);
        self.last_ai_result = Some(result.clone());

        match result.best_move {
            Some(pos) => {
                self.board.apply(pos, self.marks.mark_of(Player::Computer));
                self.last_move = Some(pos);
                if !self.conclude_if_over() {
                    self.current_turn = Player::Human;
                }
            }
            None => {
                // Only reachable on a full board, which conclude_if_over
                // already turned into a round result.
                self.message = Some("No move available".to_string());
            }
        }
    }

    /// Check the board for a concluded round and record the result.
    fn conclude_if_over(&mut self) -> bool {
        if let Some(win) = check_winner(&self.board, &self.marks) {
            let name = match win.winner {
                Player::Human => {
                    self.scores.human += 1;
                    "you"
                }
                Player::Computer => {
                    self.scores.computer += 1;
                    "computer"
                }
            };
            println!(
                "Round {}: {} win ({} : {})",
                self.round, name, self.scores.human, self.scores.computer
            );
            self.round_over = Some(RoundOutcome::Win(win));
            self.result_since = Some(Instant::now());
            return true;
        }

        if self.board.is_full() {
            println!(
                "Round {}: draw ({} : {})",
                self.round, self.scores.human, self.scores.computer
            );
            self.round_over = Some(RoundOutcome::Draw);
            self.result_since = Some(Instant::now());
            return true;
        }

        false
    }

    /// Clear an expired round result and begin the next round.
    ///
    /// Called once per frame; a concluded round stays visible for
    /// [`RESULT_DISPLAY`] before the board resets.
    pub fn clear_expired_result(&mut self) {
        if self.round_over.is_some() {
            let expired = self
                .result_since
                .is_some_and(|since| since.elapsed() >= RESULT_DISPLAY);
            if expired {
                self.start_next_round();
            }
        }
    }

    /// Reset the board for a fresh round; scores persist, human starts.
    pub fn start_next_round(&mut self) {
        self.board.reset();
        self.current_turn = Player::Human;
        self.round += 1;
        self.round_over = None;
        self.last_move = None;
        self.message = None;
        self.result_since = None;
    }

    /// Zero the scores and start over from round one.
    pub fn reset_match(&mut self) {
        self.board.reset();
        self.current_turn = Player::Human;
        self.scores = Scores::default();
        self.round = 1;
        self.round_over = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.message = None;
        self.result_since = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_computer_replies_synchronously() {
        let mut state = GameState::new();
        state.try_place(Pos::new(2, 2)).unwrap();

        // Human's mark plus the computer's reply, same call.
        assert_eq!(state.board.mark_count(), 2);
        assert_eq!(state.current_turn, Player::Human);
        assert!(state.round_over.is_none());
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut state = GameState::new();
        state.try_place(Pos::new(0, 0)).unwrap();

        let before = state.board.clone();
        assert!(state.try_place(Pos::new(0, 0)).is_err());
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_human_win_concludes_round() {
        let mut state = GameState::new();
        state.board.place_mark(Pos::new(2, 0), Mark::Nought);
        state.board.place_mark(Pos::new(2, 1), Mark::Nought);

        state.try_place(Pos::new(2, 2)).unwrap();

        assert_eq!(state.scores, Scores { human: 1, computer: 0 });
        match state.round_over {
            Some(RoundOutcome::Win(win)) => assert_eq!(win.winner, Player::Human),
            other => panic!("expected a human win, got {other:?}"),
        }
        // The computer does not move once the round is decided.
        assert_eq!(state.board.mark_count(), 3);
    }

    #[test]
    fn test_computer_win_concludes_round() {
        let mut state = GameState::new();
        for &(row, col) in &[(0, 5), (1, 3), (2, 1), (2, 2)] {
            state.board.place_mark(Pos::new(row, col), Mark::Cross);
        }
        for &(row, col) in &[(1, 5), (2, 4), (3, 4), (4, 5)] {
            state.board.place_mark(Pos::new(row, col), Mark::Nought);
        }

        // The human move does not win; the reply completes the diagonal
        // (0,4)-(1,3)-(2,2).
        state.try_place(Pos::new(3, 5)).unwrap();

        assert_eq!(state.scores, Scores { human: 0, computer: 1 });
        match state.round_over {
            Some(RoundOutcome::Win(win)) => {
                assert_eq!(win.winner, Player::Computer);
                assert_eq!(
                    win.line,
                    [Pos::new(0, 4), Pos::new(1, 3), Pos::new(2, 2)]
                );
            }
            other => panic!("expected a computer win, got {other:?}"),
        }
        assert_eq!(state.board.get(Pos::new(0, 4)), Mark::Cross);
    }

    #[test]
    fn test_no_moves_while_result_is_shown() {
        let mut state = GameState::new();
        state.board.place_mark(Pos::new(2, 0), Mark::Nought);
        state.board.place_mark(Pos::new(2, 1), Mark::Nought);
        state.try_place(Pos::new(2, 2)).unwrap();

        assert!(state.try_place(Pos::new(4, 4)).is_err());
    }

    #[test]
    fn test_next_round_keeps_scores() {
        let mut state = GameState::new();
        state.board.place_mark(Pos::new(2, 0), Mark::Nought);
        state.board.place_mark(Pos::new(2, 1), Mark::Nought);
        state.try_place(Pos::new(2, 2)).unwrap();

        state.start_next_round();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.round, 2);
        assert_eq!(state.scores, Scores { human: 1, computer: 0 });
        assert_eq!(state.current_turn, Player::Human);
        assert!(state.round_over.is_none());
    }

    #[test]
    fn test_reset_match_clears_scores() {
        let mut state = GameState::new();
        state.board.place_mark(Pos::new(2, 0), Mark::Nought);
        state.board.place_mark(Pos::new(2, 1), Mark::Nought);
        state.try_place(Pos::new(2, 2)).unwrap();

        state.reset_match();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.round, 1);
        assert_eq!(state.scores, Scores::default());
    }
}
