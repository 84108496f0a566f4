use crate::{CellCount, Coord, Pos};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions {width}x{height} must be positive")]
    InvalidDims { width: Coord, height: Coord },
    #[error("Cannot fit {mines} mines on a board of {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Position {pos:?} is outside the board")]
    OutOfBounds { pos: Pos },
}

pub type Result<T> = std::result::Result<T, GameError>;
