use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Fixed-size board of cells addressed by `(x, y)`.
///
/// Every coordinate in `[0, width) x [0, height)` holds exactly one [`Cell`]
/// whose own `x`/`y` match its position. Indexing outside that range panics;
/// use [`Grid::validate_coords`] at API boundaries.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    size: Coord2,
    cells: Array2<Cell>,
}

impl Grid {
    pub fn empty(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let size = (width, height);
        let mut cells = Array2::default(size.to_nd_index());
        for x in 0..width {
            for y in 0..height {
                cells[(x, y).to_nd_index()] = Cell::new((x, y));
            }
        }
        Ok(Self { size, cells })
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_mine)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn neighbors_of(&self, coords: Coord2) -> NeighborIter {
        neighbors_of(coords, self.size())
    }

    pub fn count_neighbors(&self, coords: Coord2, predicate: impl Fn(&Cell) -> bool) -> u8 {
        // at most eight neighbors
        self.neighbors_of(coords)
            .filter(|&pos| predicate(&self[pos]))
            .count() as u8
    }

    pub fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // bounded by `total_cells`
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }

    /// Cells in row-major order: `y` outer, `x` inner.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| &self[(x, y)]))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Recomputes `neighboring_mines` for every cell from the current mine mask.
    pub(crate) fn recount_neighbors(&mut self) {
        let (width, height) = self.size();
        for x in 0..width {
            for y in 0..height {
                let count = self.count_neighbors((x, y), |cell| cell.is_mine);
                self[(x, y)].neighboring_mines = count;
            }
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
