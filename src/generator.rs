use crate::*;

/// Source of mine positions for board construction.
pub trait MineGenerator {
    /// Returns `mines` distinct in-bounds positions, fewer only when the
    /// board cannot fit that many.
    fn place_mines(self, dims: Dims, mines: CellCount) -> Vec<Pos>;
}

/// Purely random placement: every set of `mines` cells is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator with a fresh seed drawn from the thread RNG.
    pub fn from_entropy() -> Self {
        use rand::prelude::*;

        Self {
            seed: rand::rng().random(),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place_mines(self, dims: Dims, mines: CellCount) -> Vec<Pos> {
        use rand::prelude::*;

        let (width, height) = dims;
        let mut candidates: Vec<Pos> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .collect();

        let mines = if mines as usize > candidates.len() {
            log::warn!(
                "Board already full, placing {} mines instead of the requested {}",
                candidates.len(),
                mines
            );
            candidates.len() as CellCount
        } else {
            mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed = Vec::with_capacity(mines as usize);
        for _ in 0..mines {
            let drawn = rng.random_range(0..candidates.len());
            placed.push(candidates.swap_remove(drawn));
        }
        placed
    }
}
