/// Single coordinate axis used for board positions and dimensions.
///
/// Signed so that pointer positions left of or above the board stay
/// representable and can be rejected by bounds checks instead of wrapping.
pub type Coord = i32;

/// Two-dimensional position `(x, y)`.
pub type Pos = (Coord, Coord);

/// Board dimensions `(width, height)`.
pub type Dims = (Coord, Coord);

/// Count type used for mine, flag, and total-cell counts.
pub type CellCount = u32;

/// Whether `pos` lies inside a board of the given dimensions.
pub(crate) const fn in_bounds(pos: Pos, dims: Dims) -> bool {
    pos.0 >= 0 && pos.1 >= 0 && pos.0 < dims.0 && pos.1 < dims.1
}

/// Converts an in-bounds position to an `ndarray` index.
pub(crate) fn nd_index(pos: Pos) -> [usize; 2] {
    [pos.0 as usize, pos.1 as usize]
}

/// Total cell count of a board, saturating on overflow.
///
/// Non-positive dimensions count as zero cells.
pub(crate) const fn cell_area(dims: Dims) -> CellCount {
    if dims.0 <= 0 || dims.1 <= 0 {
        return 0;
    }
    (dims.0 as CellCount).saturating_mul(dims.1 as CellCount)
}

// Offsets of the 8-neighborhood in scan order: x offset outer, y offset
// inner, center excluded.
const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Offsets `pos` by `delta`, keeping only results that land inside `bounds`.
fn apply_delta(pos: Pos, delta: (Coord, Coord), bounds: Dims) -> Option<Pos> {
    let next_x = pos.0.checked_add(delta.0)?;
    let next_y = pos.1.checked_add(delta.1)?;

    if in_bounds((next_x, next_y), bounds) {
        Some((next_x, next_y))
    } else {
        None
    }
}

/// Iterator over the in-bounds positions at Chebyshev distance 1 from a center.
#[derive(Debug)]
pub struct Neighbors {
    center: Pos,
    bounds: Dims,
    index: u8,
}

impl Neighbors {
    pub(crate) fn new(center: Pos, bounds: Dims) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while (self.index as usize) < DISPLACEMENTS.len() {
            let delta = DISPLACEMENTS[self.index as usize];
            self.index += 1;

            if let Some(pos) = apply_delta(self.center, delta, self.bounds) {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_position_has_eight_neighbors_in_scan_order() {
        let got: Vec<Pos> = Neighbors::new((1, 1), (3, 3)).collect();

        let expected = vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn corner_position_has_three_neighbors() {
        let got: Vec<Pos> = Neighbors::new((0, 0), (3, 3)).collect();

        assert_eq!(got, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_position_has_five_neighbors() {
        let got: Vec<Pos> = Neighbors::new((1, 0), (3, 3)).collect();

        assert_eq!(got, vec![(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn out_of_bounds_center_yields_only_in_bounds_positions() {
        let got: Vec<Pos> = Neighbors::new((-1, -1), (2, 2)).collect();

        assert_eq!(got, vec![(0, 0)]);
    }

    #[test]
    fn bounds_predicate_rejects_negative_and_past_the_end_positions() {
        assert!(in_bounds((0, 0), (1, 1)));
        assert!(in_bounds((2, 2), (3, 3)));
        assert!(!in_bounds((-1, 0), (3, 3)));
        assert!(!in_bounds((0, -1), (3, 3)));
        assert!(!in_bounds((3, 0), (3, 3)));
        assert!(!in_bounds((0, 3), (3, 3)));
    }

    #[test]
    fn cell_area_is_zero_for_non_positive_dimensions() {
        assert_eq!(cell_area((0, 9)), 0);
        assert_eq!(cell_area((-3, 5)), 0);
        assert_eq!(cell_area((5, -3)), 0);
        assert_eq!(cell_area((Coord::MIN, Coord::MIN)), 0);
    }

    #[test]
    fn cell_area_saturates_instead_of_overflowing() {
        assert_eq!(cell_area((30, 16)), 480);
        assert_eq!(cell_area((Coord::MAX, Coord::MAX)), CellCount::MAX);
    }
}
