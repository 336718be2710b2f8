use crate::*;
pub use layout::*;
pub use random::*;

mod layout;
mod random;

/// Strategy that builds a fully counted [`Grid`] for a validated [`GameConfig`].
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid>;
}

/// Marks `coords` as mined on a fresh grid and computes the neighbor counts.
fn build_grid(config: GameConfig, mines: impl IntoIterator<Item = Coord2>) -> Result<Grid> {
    let mut grid = Grid::empty(config.width, config.height)?;
    for coords in mines {
        let coords = grid.validate_coords(coords)?;
        grid[coords].is_mine = true;
    }
    grid.recount_neighbors();
    Ok(grid)
}
