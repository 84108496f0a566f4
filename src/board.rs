use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::ops::Index;

use crate::types::{cell_area, in_bounds, nd_index};
use crate::*;

/// Grid of cells with mines placed and adjacency counts computed.
///
/// Positions are validated by the session layer; the primitives here treat
/// an out-of-bounds position as a contract violation and panic. Use
/// [`Board::get`] for checked access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a board with `mines` cells drawn from `generator`.
    pub fn generate(dims: Dims, mines: CellCount, generator: impl MineGenerator) -> Result<Self> {
        let mut board = Self::blank(dims)?;
        let cells = board.total_cells();
        if mines > cells {
            return Err(GameError::TooManyMines { mines, cells });
        }

        for pos in generator.place_mines(dims, mines) {
            board.cells[nd_index(pos)].set_mine(true);
        }
        board.guarantee_adjacent_mines();
        Ok(board)
    }

    /// Builds a board with mines exactly at `mines`; duplicates collapse.
    pub fn from_mine_positions(dims: Dims, mines: &[Pos]) -> Result<Self> {
        let mut board = Self::blank(dims)?;
        for &pos in mines {
            if !board.good_position(pos) {
                return Err(GameError::OutOfBounds { pos });
            }
            board.cells[nd_index(pos)].set_mine(true);
        }
        board.guarantee_adjacent_mines();
        Ok(board)
    }

    fn blank(dims: Dims) -> Result<Self> {
        let (width, height) = dims;
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidDims { width, height });
        }
        Ok(Self {
            cells: Array2::default([width as usize, height as usize]),
        })
    }

    /// Dimensions `(width, height)` of the grid.
    pub fn dims(&self) -> Dims {
        let (width, height) = self.cells.dim();
        (width as Coord, height as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        cell_area(self.dims())
    }

    /// Whether `pos` lies on the board.
    pub fn good_position(&self, pos: Pos) -> bool {
        in_bounds(pos, self.dims())
    }

    /// In-bounds neighbors of `pos` in scan order.
    pub fn surrounding_positions(&self, pos: Pos) -> Neighbors {
        Neighbors::new(pos, self.dims())
    }

    /// Bounds-checked cell access.
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.good_position(pos).then(|| &self.cells[nd_index(pos)])
    }

    /// Iterates every `(position, cell)` pair of the grid.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    /// Number of mined cells, recounted on every call.
    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mined()).count() as CellCount
    }

    /// Number of flagged cells.
    pub fn flag_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged()).count() as CellCount
    }

    /// True when every non-mined cell has been uncovered.
    pub fn is_won(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mined() || !cell.is_covered())
    }

    /// Uncovers `pos`, cascading through zero-adjacency regions.
    ///
    /// Returns true when the target is an unflagged mine; the board is left
    /// untouched in that case and the caller decides the endgame.
    pub fn reveal(&mut self, pos: Pos) -> bool {
        let target = self[pos];
        if target.is_mined() && !target.is_flagged() {
            return true;
        }

        let mut visited: HashSet<Pos> = HashSet::new();
        let mut to_visit = VecDeque::from([pos]);

        while let Some(visit_pos) = to_visit.pop_front() {
            if !visited.insert(visit_pos) {
                continue;
            }

            // flagged and already-uncovered cells stop the cascade, and a
            // mined neighbor is never uncovered by it
            let cell = self[visit_pos];
            if !cell.is_covered() || cell.is_flagged() || cell.is_mined() {
                continue;
            }

            self.cells[nd_index(visit_pos)].uncover();
            log::trace!(
                "Uncovered cell at {:?}, adjacent mines: {}",
                visit_pos,
                cell.adjacent_mines()
            );

            if cell.adjacent_mines() == 0 {
                to_visit.extend(
                    self.surrounding_positions(visit_pos)
                        .filter(|&next| self[next].is_covered())
                        .filter(|next| !visited.contains(next)),
                );
            }
        }
        false
    }

    /// Toggles the flag on a covered cell; uncovered cells never change.
    pub fn flag(&mut self, pos: Pos) {
        let cell = &mut self.cells[nd_index(pos)];
        if cell.is_covered() {
            let flagged = cell.is_flagged();
            cell.set_flag(!flagged);
        }
    }

    /// Uncovers everything except flagged cells (the loss display).
    pub fn uncover_all_besides_flagged(&mut self) {
        for cell in self.cells.iter_mut() {
            if !cell.is_flagged() {
                cell.uncover();
            }
        }
    }

    fn adjacent_mines_at(&self, pos: Pos) -> u8 {
        self.surrounding_positions(pos)
            .filter(|&next| self[next].is_mined())
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[nd_index(pos)]
    }
}

/// Direct mine-layout control for deterministic setups in tests and tools.
///
/// These bypass the construction-time placement; after manual edits,
/// `guarantee_adjacent_mines` restores the adjacency invariant.
pub trait BoardSetup {
    /// Removes every mine and zeroes all adjacency counts.
    fn clear_mines_on_board(&mut self);

    /// Sets or removes a mine at `pos` without touching adjacency counts.
    fn set_mine(&mut self, pos: Pos, mined: bool);

    /// Recomputes the adjacency count of every non-mined cell. Idempotent.
    fn guarantee_adjacent_mines(&mut self);
}

impl BoardSetup for Board {
    fn clear_mines_on_board(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_mine(false);
            cell.set_adjacent_mines(0);
        }
    }

    fn set_mine(&mut self, pos: Pos, mined: bool) {
        self.cells[nd_index(pos)].set_mine(mined);
    }

    fn guarantee_adjacent_mines(&mut self) {
        let (width, height) = self.dims();
        for x in 0..width {
            for y in 0..height {
                let pos = (x, y);
                if !self[pos].is_mined() {
                    let count = self.adjacent_mines_at(pos);
                    self.cells[nd_index(pos)].set_adjacent_mines(count);
                }
            }
        }
    }
}
