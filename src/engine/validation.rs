//! Game state consistency checks

use super::board::Cell;
use super::game::{GameOutcome, GameState, Phase};

impl GameState {
    /// Check the structural invariants of a game state.
    ///
    /// A state produced only through `initialize` and `apply_move` always
    /// satisfies these; the check exists for tests and for hosts that
    /// deserialize state from elsewhere.
    ///
    /// - every global slot equals the outcome derived from its local board
    /// - the active board, when set, indexes a board that is still open
    /// - phase and result agree with the global vector
    /// - total mark counts differ by at most one
    pub fn is_consistent(&self) -> bool {
        // Global vector in lockstep with the local boards
        for board in 0..9 {
            if self.global().slot(board) != self.local(board).outcome() {
                return false;
            }
        }

        // A forced target must be an open board, and only mid-game
        if let Some(active) = self.active_board() {
            if active >= 9 || !self.global().slot(active).is_open() {
                return false;
            }
            if self.phase() != Phase::InProgress {
                return false;
            }
        }

        // Phase and result must agree with the global vector
        match self.phase() {
            Phase::NotStarted => return false,
            Phase::InProgress => {
                if self.result().is_some() {
                    return false;
                }
                if self.global().winner().is_some() || self.global().is_full() {
                    return false;
                }
            }
            Phase::Finished => match self.result() {
                Some(GameOutcome::Win(mark)) => {
                    if self.global().winner() != Some(mark) {
                        return false;
                    }
                }
                Some(GameOutcome::Draw) => {
                    if self.global().winner().is_some() || !self.global().is_full() {
                        return false;
                    }
                }
                None => return false,
            },
        }

        // Strict alternation keeps the mark totals within one of each
        // other, whichever mark opened the game.
        let mut x_count = 0usize;
        let mut o_count = 0usize;
        for board in 0..9 {
            for &cell in self.local(board).cells() {
                match cell {
                    Cell::X => x_count += 1,
                    Cell::O => o_count += 1,
                    Cell::Empty => {}
                }
            }
        }
        x_count.abs_diff(o_count) <= 1
    }
}
