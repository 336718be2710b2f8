use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod types;
mod view;

/// Board sizes offered for square boards.
pub const SQUARE_SIZES: [Coord; 3] = [8, 10, 15];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Rejects empty boards and mine counts that leave no safe cell.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(width, height, mines).validate()
    }

    /// Square board with a fifth of its cells mined, rounded down.
    pub fn square(size: Coord) -> Result<Self> {
        Self::new(size, size, mult(size, size) / 5)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(30, 16, 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(self)
    }
}

/// Builds a game on a randomly mined board using ambient randomness.
pub fn generate(width: Coord, height: Coord, mines: CellCount) -> Result<Game> {
    let config = GameConfig::new(width, height, mines)?;
    generate_with(config, RandomBoardGenerator::from_entropy())
}

pub fn generate_with(config: GameConfig, generator: impl BoardGenerator) -> Result<Game> {
    Ok(Game::new(generator.generate(config)?))
}

/// Reveals `(x, y)` on a copy of `game` and returns the copy.
pub fn reveal(x: Coord, y: Coord, game: &Game) -> Result<Game> {
    let mut next = game.clone();
    next.reveal((x, y))?;
    Ok(next)
}

/// Toggles the flag at `(x, y)` on a copy of `game` and returns the copy.
pub fn toggle_flag(x: Coord, y: Coord, game: &Game) -> Result<Game> {
    let mut next = game.clone();
    next.toggle_flag((x, y))?;
    Ok(next)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Merges outcomes of a multi-cell reveal, the most significant one wins.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_degenerate_boards() {
        assert_eq!(GameConfig::new(0, 5, 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new(5, 0, 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new(2, 2, 4), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(2, 2, 5), Err(GameError::TooManyMines));
        assert!(GameConfig::new(2, 2, 3).is_ok());
        assert!(GameConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn presets_are_valid() {
        for config in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(config));
        }
    }

    #[test]
    fn square_boards_use_one_fifth_density() {
        let mines: Vec<_> = SQUARE_SIZES
            .iter()
            .map(|&size| GameConfig::square(size).unwrap().mines)
            .collect();
        assert_eq!(mines, vec![12, 20, 45]);
    }

    #[test]
    fn generate_builds_fresh_game() {
        let game = generate(10, 8, 12).unwrap();

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!((game.width(), game.height()), (10, 8));
        assert_eq!(game.mine_count(), 12);
        assert_eq!(game.flags_remaining(), 12);
        assert_eq!(game.grid().mine_count(), 12);
    }

    #[test]
    fn generate_fails_fast_on_bad_input() {
        assert_eq!(generate(4, 4, 16).err(), Some(GameError::TooManyMines));
        assert_eq!(generate(0, 4, 1).err(), Some(GameError::InvalidDimensions));
    }

    #[test]
    fn snapshot_operations_leave_input_untouched() {
        let config = GameConfig::new(3, 3, 1).unwrap();
        let game = generate_with(config, LayoutGenerator::new([(2, 2)])).unwrap();

        let flagged = toggle_flag(2, 2, &game).unwrap();
        let revealed = reveal(0, 0, &flagged).unwrap();

        assert!(!game.cell_at((2, 2)).is_flagged);
        assert!(flagged.cell_at((2, 2)).is_flagged);
        assert!(!flagged.cell_at((0, 0)).is_revealed);
        assert_eq!(revealed.state(), GameState::Won);
        assert_eq!(flagged.state(), GameState::InProgress);
    }

    #[test]
    fn snapshot_operations_reject_out_of_range() {
        let game = generate(4, 4, 2).unwrap();
        assert_eq!(reveal(4, 0, &game).err(), Some(GameError::InvalidCoords));
        assert_eq!(toggle_flag(0, 9, &game).err(), Some(GameError::InvalidCoords));
    }

    #[test]
    fn outcome_merge_prefers_mine_hit() {
        use RevealOutcome::*;
        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | Revealed, Revealed);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
    }
}
