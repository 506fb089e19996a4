//! Winning line analysis shared by local and global boards

use super::board::Mark;

/// Winning line indices on a 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A slot that can participate in a line scan.
///
/// Local-board cells and global outcome slots both implement this, so the
/// same scan serves both scopes. A drawn global slot is closed but carries
/// no mark, which is what keeps draws from ever completing a line.
pub trait Slot {
    /// The mark counted by the line scan, if any
    fn mark(&self) -> Option<Mark>;

    /// Whether the slot can still change
    fn is_open(&self) -> bool;
}

/// Utility for scanning the 8 fixed winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the mark holding a complete line, if any
    pub fn winner<T: Slot>(slots: &[T; 9]) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = slots[a].mark()?;
            (slots[b].mark() == Some(mark) && slots[c].mark() == Some(mark)).then_some(mark)
        })
    }

    /// Check whether every slot is closed (occupied or decided)
    pub fn all_closed<T: Slot>(slots: &[T; 9]) -> bool {
        slots.iter().all(|slot| !slot.is_open())
    }
}
