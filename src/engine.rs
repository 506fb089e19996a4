//! Ultimate Tic-Tac-Toe game engine

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Cell, GlobalBoard, LocalBoard, Mark, Outcome};
pub use game::{GameEngine, GameOutcome, GameState, Phase};
pub use lines::{LineAnalyzer, Slot, WINNING_LINES};
