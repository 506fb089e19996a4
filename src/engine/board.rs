//! Board state representation for local boards and the global meta-board

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::{LineAnalyzer, Slot};

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cell on a local board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Convert a cell to the mark occupying it
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl Slot for Cell {
    fn mark(&self) -> Option<Mark> {
        self.to_mark()
    }

    fn is_open(&self) -> bool {
        *self == Cell::Empty
    }
}

/// Terminal outcome slot of a local board
///
/// `Open` means the local board is still playable. A drawn board is closed
/// but contributes no mark to the global line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Open,
    Won(Mark),
    Draw,
}

impl Outcome {
    pub fn is_open(self) -> bool {
        self == Outcome::Open
    }
}

impl Slot for Outcome {
    fn mark(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Open | Outcome::Draw => None,
        }
    }

    fn is_open(&self) -> bool {
        Outcome::is_open(*self)
    }
}

/// One of the nine 3x3 local boards
///
/// Only 9 bytes, so it implements `Copy` like any other slice of game
/// state. Cells are mutated exclusively through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalBoard {
    cells: [Cell; 9],
}

impl LocalBoard {
    /// Create an empty local board
    pub fn new() -> Self {
        LocalBoard {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters; whitespace is filtered
    /// out first.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters remain or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(LocalBoard { cells })
    }

    /// Get cell at position (0-8)
    pub fn cell(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// All 9 cells in index order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        LineAnalyzer::all_closed(&self.cells)
    }

    /// Get the mark holding a complete line, if any
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Derive the board's outcome: a winner fixes it, a full board without
    /// one is a draw, anything else stays open.
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Won(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Open
        }
    }

    /// Positions still empty on this board
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn place(&mut self, pos: usize, mark: Mark) {
        self.cells[pos] = mark.into();
    }
}

impl Default for LocalBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocalBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The 3x3 meta-board of local-board outcomes
///
/// Maintained in lockstep with the nine local boards: slot `i` holds the
/// terminal outcome (if any) of local board `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalBoard {
    slots: [Outcome; 9],
}

impl GlobalBoard {
    /// Create a global board with every slot open
    pub fn new() -> Self {
        GlobalBoard {
            slots: [Outcome::Open; 9],
        }
    }

    /// Get the outcome slot for local board `pos` (0-8)
    pub fn slot(&self, pos: usize) -> Outcome {
        self.slots[pos]
    }

    /// All 9 outcome slots in board order
    pub fn slots(&self) -> &[Outcome; 9] {
        &self.slots
    }

    /// Get the mark holding a complete line of won boards, if any.
    ///
    /// Drawn slots are closed but never match, so they cannot complete a
    /// line for either player.
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(&self.slots)
    }

    /// Check if every local board is decided (won or drawn)
    pub fn is_full(&self) -> bool {
        LineAnalyzer::all_closed(&self.slots)
    }

    /// Indices of local boards whose outcome is still open
    pub fn open_boards(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(_, slot)| slot.is_open())
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn set(&mut self, pos: usize, outcome: Outcome) {
        self.slots[pos] = outcome;
    }
}

impl Default for GlobalBoard {
    fn default() -> Self {
        Self::new()
    }
}
