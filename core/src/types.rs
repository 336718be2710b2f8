/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Lazily enumerates the in-bounds Moore neighbors of `center` on a board of `bounds`.
pub fn neighbors_of(center: Coord2, bounds: Coord2) -> NeighborIter {
    NeighborIter::new(center, bounds)
}

/// Column by column: `dx` outer, `dy` inner.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - usize::from(self.index)))
    }
}

impl core::iter::FusedIterator for NeighborIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = neighbors_of((0, 0), (4, 4)).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);

        let neighbors: Vec<_> = neighbors_of((3, 3), (4, 4)).collect();
        assert_eq!(neighbors, vec![(2, 2), (2, 3), (3, 2)]);
    }

    #[test]
    fn edge_and_interior_counts() {
        assert_eq!(neighbors_of((2, 0), (5, 5)).count(), 5);
        assert_eq!(neighbors_of((2, 2), (5, 5)).count(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors_of((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn cloned_iterator_restarts_from_same_point() {
        let mut iter = neighbors_of((1, 1), (3, 3));
        iter.next();
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest.len(), 7);
        assert_eq!(iter.collect::<Vec<_>>(), rest);
    }

    #[test]
    fn neighbors_never_leave_max_coordinate_board() {
        let bounds = (Coord::MAX, Coord::MAX);
        let corner = (Coord::MAX - 1, Coord::MAX - 1);
        assert!(neighbors_of(corner, bounds).all(|(x, y)| x < bounds.0 && y < bounds.1));
        assert_eq!(neighbors_of(corner, bounds).count(), 3);
    }
}
