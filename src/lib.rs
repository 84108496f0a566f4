pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod types;

/// Board dimensions of the default game.
pub const DEFAULT_DIMS: Dims = (30, 16);

/// Mine count of the default game.
pub const DEFAULT_MINES: CellCount = 49;
