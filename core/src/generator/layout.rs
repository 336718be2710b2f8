use super::*;

/// Places mines at an explicit list of coordinates, for fixtures and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutGenerator {
    mines: Vec<Coord2>,
}

impl LayoutGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl BoardGenerator for LayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        let config = config.validate()?;
        let grid = build_grid(config, self.mines)?;

        let placed = grid.mine_count();
        if placed != config.mines {
            log::warn!(
                "Mine layout count mismatch, placed: {}, requested: {}",
                placed,
                config.mines
            );
            return Err(GameError::InvalidLayout);
        }
        Ok(grid)
    }
}
