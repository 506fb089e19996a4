//! Text rendering for game state
//!
//! A thin adapter over the engine's read-only queries: nothing here
//! mutates game state, and the engine never depends on anything here.

use crate::engine::{GameOutcome, GameState, Mark, Outcome, Phase};

/// Display names for the two players.
///
/// Used only for human-readable status messages; the engine itself knows
/// nothing about names. Blank names fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        let x = x.into();
        let o = o.into();
        PlayerNames {
            x: if x.trim().is_empty() {
                "Player X".to_string()
            } else {
                x
            },
            o: if o.trim().is_empty() {
                "Player O".to_string()
            } else {
                o
            },
        }
    }

    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames::new("Player X", "Player O")
    }
}

/// One-line status text for the current state.
///
/// Mid-game it names the player to move and the board constraint; finished
/// games report the winner or the draw.
pub fn status_line(state: &GameState, names: &PlayerNames) -> String {
    match (state.phase(), state.result()) {
        (Phase::Finished, Some(GameOutcome::Win(mark))) => {
            format!("{} wins!", names.name(mark))
        }
        (Phase::Finished, _) => "It's a draw!".to_string(),
        _ => {
            let constraint = match state.active_board() {
                Some(board) => format!("next: board {}", board + 1),
                None => "next: any board".to_string(),
            };
            format!(
                "{}'s turn ({constraint})",
                names.name(state.current_player())
            )
        }
    }
}

/// Render the full 9x9 grid of cells.
///
/// Local boards are laid out 3x3 with column and row separators:
///
/// ```text
/// ... | ... | ...
/// ... | ... | ...
/// ... | ... | ...
/// ----+-----+----
/// ```
pub fn format_grid(state: &GameState) -> String {
    let mut out = String::new();
    for board_row in 0..3 {
        if board_row > 0 {
            out.push_str("----+-----+----\n");
        }
        for cell_row in 0..3 {
            for board_col in 0..3 {
                if board_col > 0 {
                    out.push_str(" | ");
                }
                let board = board_row * 3 + board_col;
                for cell_col in 0..3 {
                    let cell = state.cell(board, cell_row * 3 + cell_col);
                    out.push(cell.to_char());
                }
            }
            out.push('\n');
        }
    }
    out
}

/// Render the 3x3 global outcome vector, `.` for open boards and `=` for
/// drawn ones.
pub fn format_global(state: &GameState) -> String {
    let mut out = String::new();
    for (i, &slot) in state.global().slots().iter().enumerate() {
        out.push(match slot {
            Outcome::Open => '.',
            Outcome::Won(mark) => mark.to_char(),
            Outcome::Draw => '=',
        });
        if (i + 1).is_multiple_of(3) && i < 8 {
            out.push('\n');
        }
    }
    out
}
