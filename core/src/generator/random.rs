use rand::Rng;
use rand::SeedableRng;
use rand::rngs::{SmallRng, ThreadRng};

use super::*;

/// Purely random placement: no spatial bias and no safe first reveal.
///
/// Coordinates are sampled uniformly, skipping ones already mined, until the
/// configured number of distinct cells hold a mine. `GameConfig` guarantees
/// at least one free cell remains, so sampling always terminates.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBoardGenerator<SmallRng> {
    /// Deterministic generator, same seed gives the same board.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl RandomBoardGenerator<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<Grid> {
        let config = config.validate()?;
        let mut grid = Grid::empty(config.width, config.height)?;

        let mut mines_placed: CellCount = 0;
        let mut samples = 0usize;
        while mines_placed < config.mines {
            let coords = (
                self.rng.random_range(0..config.width),
                self.rng.random_range(0..config.height),
            );
            samples += 1;

            if !grid[coords].is_mine {
                grid[coords].is_mine = true;
                mines_placed += 1;
            }
        }
        grid.recount_neighbors();

        log::debug!(
            "Generated {}x{} board with {} mines after {} samples",
            config.width,
            config.height,
            mines_placed,
            samples
        );
        Ok(grid)
    }
}
