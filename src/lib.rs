//! Ultimate Tic-Tac-Toe rules engine
//!
//! This crate provides:
//! - The complete game state machine: turn order, move legality, local and
//!   global win detection, meta-board routing, terminal states
//! - A read-only query surface for renderers
//! - Text rendering helpers and an interactive terminal binary
//!
//! The engine is pure and synchronous: every operation runs to completion,
//! rejected moves leave the state untouched, and a host embedding it in a
//! concurrent environment only has to serialize calls to `apply_move`.

pub mod engine;
pub mod error;
pub mod render;

pub use engine::{
    Cell, GameEngine, GameOutcome, GameState, GlobalBoard, LineAnalyzer, LocalBoard, Mark, Outcome,
    Phase, Slot, WINNING_LINES,
};
pub use error::{Error, Result};
pub use render::PlayerNames;
