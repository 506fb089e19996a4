//! The game state machine: turn order, move legality, and terminal states

use serde::{Deserialize, Serialize};

use super::board::{Cell, GlobalBoard, LocalBoard, Mark};

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// Complete state of one Ultimate Tic-Tac-Toe game.
///
/// The nine local boards, the global outcome vector kept in lockstep with
/// them, the player to move, and the routing constraint. State advances
/// only through [`apply_move`](GameState::apply_move), which returns a new
/// value and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    locals: [LocalBoard; 9],
    global: GlobalBoard,
    current_player: Mark,
    active_board: Option<usize>,
    phase: Phase,
    result: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh in-progress game with the given starting player.
    ///
    /// All boards empty, any board playable.
    pub fn new(starting_player: Mark) -> Self {
        GameState {
            locals: [LocalBoard::new(); 9],
            global: GlobalBoard::new(),
            current_player: starting_player,
            active_board: None,
            phase: Phase::InProgress,
            result: None,
        }
    }

    /// The mark to move next
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// The local board the current player is constrained to, if any.
    ///
    /// `None` means any board with an open outcome is playable.
    pub fn active_board(&self) -> Option<usize> {
        self.active_board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The final result once `phase` is `Finished`
    pub fn result(&self) -> Option<GameOutcome> {
        self.result
    }

    /// Local board at index (0-8)
    pub fn local(&self, board: usize) -> &LocalBoard {
        &self.locals[board]
    }

    /// The global outcome vector
    pub fn global(&self) -> &GlobalBoard {
        &self.global
    }

    /// Cell at `cell` of local board `board` (both 0-8)
    pub fn cell(&self, board: usize, cell: usize) -> Cell {
        self.locals[board].cell(cell)
    }

    /// Whether a local board may legally receive the next move.
    ///
    /// This is the rule a renderer uses to highlight boards: nothing is
    /// playable once the game is over; a forced board is the only playable
    /// one; otherwise every board with an open outcome is playable.
    pub fn is_playable(&self, board: usize) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        match self.active_board {
            Some(active) => board == active,
            None => self.global.slot(board).is_open(),
        }
    }

    /// All `(board, cell)` pairs the current player may legally play
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        if self.phase != Phase::InProgress {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for board in 0..9 {
            if !self.is_playable(board) {
                continue;
            }
            for cell in self.locals[board].empty_positions() {
                moves.push((board, cell));
            }
        }
        moves
    }

    /// Apply the current player's move and return the resulting state.
    ///
    /// On success the mark is placed, the target board's outcome and the
    /// global vector are refreshed, terminal conditions are checked, the
    /// routing constraint for the opponent is computed, and the turn
    /// passes. The cell index played determines the opponent's board: they
    /// are sent to the local board with that same index unless its outcome
    /// is already decided, in which case any open board is playable.
    ///
    /// # Errors
    ///
    /// The move is rejected, leaving the state unchanged, when the game is
    /// not in progress, an index is out of range, the routing constraint
    /// points elsewhere, the target board is already decided, or the cell
    /// is occupied.
    #[must_use = "apply_move returns a new game state; the original is unchanged"]
    pub fn apply_move(&self, board: usize, cell: usize) -> crate::Result<GameState> {
        if self.phase != Phase::InProgress {
            return Err(crate::Error::GameOver);
        }
        if board >= 9 {
            return Err(crate::Error::IndexOutOfRange { index: board });
        }
        if cell >= 9 {
            return Err(crate::Error::IndexOutOfRange { index: cell });
        }
        if let Some(active) = self.active_board {
            if board != active {
                return Err(crate::Error::WrongBoard { board, active });
            }
        }
        if !self.global.slot(board).is_open() {
            return Err(crate::Error::BoardClosed { board });
        }
        if !self.locals[board].is_empty(cell) {
            return Err(crate::Error::CellOccupied { board, cell });
        }

        let mut next = self.clone();
        next.locals[board].place(cell, next.current_player);
        next.global.set(board, next.locals[board].outcome());

        if let Some(winner) = next.global.winner() {
            next.phase = Phase::Finished;
            next.result = Some(GameOutcome::Win(winner));
            next.active_board = None;
        } else if next.global.is_full() {
            next.phase = Phase::Finished;
            next.result = Some(GameOutcome::Draw);
            next.active_board = None;
        } else {
            // Routing rule: the cell played sends the opponent to the
            // local board with that index, unless it is already decided.
            next.active_board = next.global.slot(cell).is_open().then_some(cell);
        }

        next.current_player = next.current_player.opponent();
        Ok(next)
    }
}

/// Owner of the single mutable [`GameState`].
///
/// The engine is the only component that mutates game state; a renderer
/// re-reads the state after each successful call. `reset` discards the
/// state wholesale, so `initialize` must run again before further moves.
#[derive(Debug, Default)]
pub struct GameEngine {
    state: Option<GameState>,
}

impl GameEngine {
    /// Create an engine with no game in progress
    pub fn new() -> Self {
        GameEngine { state: None }
    }

    /// Start a fresh game with the given starting player.
    ///
    /// The starting player comes from whatever first-player chooser the
    /// host uses; a coin toss is one option but not the engine's concern.
    pub fn initialize(&mut self, starting_player: Mark) -> &GameState {
        self.state.insert(GameState::new(starting_player))
    }

    /// Apply the current player's move.
    ///
    /// # Errors
    ///
    /// See [`GameState::apply_move`]; calling before `initialize` (or
    /// after `reset`) also fails with [`Error::GameOver`](crate::Error).
    /// The held state is unchanged on every error path.
    pub fn apply_move(&mut self, board: usize, cell: usize) -> crate::Result<&GameState> {
        let current = self.state.as_ref().ok_or(crate::Error::GameOver)?;
        let next = current.apply_move(board, cell)?;
        Ok(self.state.insert(next))
    }

    /// Discard the current game, if any
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// The current game state, if a game has been initialized
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Current phase, `NotStarted` when no game has been initialized
    pub fn phase(&self) -> Phase {
        self.state.as_ref().map_or(Phase::NotStarted, GameState::phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::board::Outcome;

    #[test]
    fn test_initialize() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.phase(), Phase::NotStarted);

        let state = engine.initialize(Mark::O);
        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(state.active_board(), None);
        assert_eq!(state.result(), None);
        for board in 0..9 {
            assert_eq!(state.global().slot(board), Outcome::Open);
            assert!(state.is_playable(board));
        }
    }

    #[test]
    fn test_move_before_initialize_is_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(0, 0), Err(crate::Error::GameOver));
    }

    #[test]
    fn test_first_move_routes_opponent() {
        let mut engine = GameEngine::new();
        engine.initialize(Mark::X);

        let state = engine.apply_move(0, 4).unwrap();
        assert_eq!(state.cell(0, 4), Cell::X);
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(state.active_board(), Some(4));
        assert!(state.is_playable(4));
        assert!(!state.is_playable(0));
    }

    #[test]
    fn test_wrong_board_is_rejected() {
        let mut engine = GameEngine::new();
        engine.initialize(Mark::X);
        engine.apply_move(0, 4).unwrap();

        let before = engine.state().unwrap().clone();
        let err = engine.apply_move(3, 0).unwrap_err();
        assert_eq!(err, crate::Error::WrongBoard { board: 3, active: 4 });
        assert_eq!(engine.state().unwrap(), &before);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut engine = GameEngine::new();
        engine.initialize(Mark::X);
        engine.apply_move(4, 4).unwrap();

        let before = engine.state().unwrap().clone();
        let err = engine.apply_move(4, 4).unwrap_err();
        assert_eq!(err, crate::Error::CellOccupied { board: 4, cell: 4 });
        assert_eq!(engine.state().unwrap(), &before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut engine = GameEngine::new();
        engine.initialize(Mark::X);

        assert_eq!(
            engine.apply_move(9, 0),
            Err(crate::Error::IndexOutOfRange { index: 9 })
        );
        assert_eq!(
            engine.apply_move(0, 12),
            Err(crate::Error::IndexOutOfRange { index: 12 })
        );
    }

    #[test]
    fn test_routing_to_decided_board_frees_choice() {
        let mut engine = GameEngine::new();
        engine.initialize(Mark::X);

        // X wins board 0 on the 2-5-8 column while O echoes back.
        engine.apply_move(0, 5).unwrap();
        engine.apply_move(5, 0).unwrap();
        engine.apply_move(0, 8).unwrap();
        engine.apply_move(8, 0).unwrap();
        let state = engine.apply_move(0, 2).unwrap();
        assert_eq!(state.global().slot(0), Outcome::Won(Mark::X));
        assert_eq!(state.active_board(), Some(2));

        // O plays cell 0 of board 2, which routes to the decided board 0,
        // so X may choose any open board.
        let state = engine.apply_move(2, 0).unwrap();
        assert_eq!(state.active_board(), None);
        assert!(!state.is_playable(0));
        assert!(state.is_playable(1));

        // Board 0 itself now rejects moves outright.
        assert_eq!(
            engine.apply_move(0, 1),
            Err(crate::Error::BoardClosed { board: 0 })
        );
    }

    #[test]
    fn test_legal_moves_respect_routing() {
        let mut engine = GameEngine::new();
        engine.initialize(Mark::X);
        let state = engine.apply_move(0, 4).unwrap();

        let moves = state.legal_moves();
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().all(|&(board, _)| board == 4));
    }

    #[test]
    fn test_legal_moves_on_fresh_game() {
        let mut engine = GameEngine::new();
        let state = engine.initialize(Mark::X);
        assert_eq!(state.legal_moves().len(), 81);
    }

    #[test]
    fn test_reset_discards_state() {
        let mut engine = GameEngine::new();
        engine.initialize(Mark::X);
        engine.apply_move(0, 4).unwrap();

        engine.reset();
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert!(engine.state().is_none());
        assert_eq!(engine.apply_move(4, 0), Err(crate::Error::GameOver));
    }
}
