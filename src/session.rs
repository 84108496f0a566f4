use serde::{Deserialize, Serialize};

use crate::*;

/// One game from construction to win or loss.
///
/// Commands arriving from the outside are absorbed silently when they make
/// no sense: out-of-bounds positions and anything after the game is over
/// leave the session unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    mine_count: CellCount,
    flags_remaining: i32,
    elapsed: f64,
    started: bool,
    over: bool,
    won: bool,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        let mine_count = board.mine_count();
        let flags_remaining = mine_count as i32 - board.flag_count() as i32;
        Self {
            board,
            mine_count,
            flags_remaining,
            elapsed: 0.0,
            started: false,
            over: false,
            won: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dims(&self) -> Dims {
        self.board.dims()
    }

    /// Configured mine count minus flags placed; negative when over-flagged.
    pub fn flags_remaining(&self) -> i32 {
        self.flags_remaining
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Whole minutes elapsed since the first reveal.
    pub fn minutes(&self) -> u32 {
        (self.elapsed as u64 / 60) as u32
    }

    /// Seconds elapsed in the current minute.
    pub fn seconds(&self) -> u32 {
        (self.elapsed as u64 % 60) as u32
    }

    /// Uncovers the cell at `pos` and settles the game when that reveal
    /// hits a mine or clears the last safe cell.
    ///
    /// The first reveal starts the clock, even one that misses the board.
    pub fn reveal(&mut self, pos: Pos) {
        self.mark_started();
        if !self.board.good_position(pos) || self.over {
            return;
        }

        if self.board.reveal(pos) {
            log::debug!("Revealed a mine at {:?}, session lost", pos);
            self.board.uncover_all_besides_flagged();
            self.over = true;
        } else if self.board.is_won() {
            log::debug!("All safe cells uncovered, session won");
            self.over = true;
            self.won = true;
        }
    }

    /// Toggles the flag at `pos` and refreshes the flags-remaining counter.
    pub fn flag(&mut self, pos: Pos) {
        if !self.board.good_position(pos) || self.over {
            return;
        }

        self.board.flag(pos);
        self.flags_remaining = self.mine_count as i32 - self.board.flag_count() as i32;
    }

    /// Advances the session clock by `dt` seconds while a game is running.
    pub fn on_frame(&mut self, dt: f64) {
        if self.started && !self.over {
            self.elapsed += dt;
        }
    }

    /// Replaces the session with a fresh board of the same dimensions and
    /// mine count, newly seeded.
    pub fn reset(&mut self) {
        let board = Board::generate(
            self.dims(),
            self.mine_count,
            RandomMineGenerator::from_entropy(),
        )
        .expect("current dimensions and mine count stay valid");
        *self = Self::new(board);
        log::debug!("Session reset");
    }

    fn mark_started(&mut self) {
        if !self.started {
            self.started = true;
            log::debug!("Session started");
        }
    }
}

impl Default for GameSession {
    /// Session over the default 30x16 board with 49 freshly drawn mines.
    fn default() -> Self {
        let board = Board::generate(
            DEFAULT_DIMS,
            DEFAULT_MINES,
            RandomMineGenerator::from_entropy(),
        )
        .expect("the default configuration is valid");
        Self::new(board)
    }
}
