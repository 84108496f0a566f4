use serde::{Deserialize, Serialize};

/// State of a single board square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    covered: bool,
    flagged: bool,
    mined: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub fn new(mined: bool) -> Self {
        Self {
            mined,
            ..Self::default()
        }
    }

    /// Uncovers the cell, removing any flag on it. Idempotent.
    pub fn uncover(&mut self) {
        self.covered = false;
        self.flagged = false;
    }

    /// Callers only flag covered cells; an uncovered cell never carries a flag.
    pub fn set_flag(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub(crate) fn set_mine(&mut self, mined: bool) {
        self.mined = mined;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub const fn is_covered(self) -> bool {
        self.covered
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn is_mined(self) -> bool {
        self.mined
    }

    /// Number of mined neighbors, meaningful only while the cell itself is not mined.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            covered: true,
            flagged: false,
            mined: false,
            adjacent_mines: 0,
        }
    }
}
