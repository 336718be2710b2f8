use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only projection of a [`Game`] for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub state: GameState,
    pub mine_count: CellCount,
    pub flags_remaining: i32,
    pub width: Coord,
    pub height: Coord,
    /// Row-major, `y` outer and `x` inner.
    pub cells: Vec<Cell>,
}

impl GameView {
    /// Full projection, including the mine layout.
    pub fn from_game(game: &Game) -> Self {
        Self::project(game, |cell| *cell)
    }

    /// Projection that hides what the player cannot see yet: hidden cells
    /// report no mine and no neighbor count.
    pub fn masked(game: &Game) -> Self {
        Self::project(game, |cell| {
            if cell.is_revealed {
                *cell
            } else {
                Cell {
                    is_mine: false,
                    neighboring_mines: 0,
                    ..*cell
                }
            }
        })
    }

    fn project(game: &Game, map: impl Fn(&Cell) -> Cell) -> Self {
        Self {
            state: game.state(),
            mine_count: game.mine_count(),
            flags_remaining: game.flags_remaining(),
            width: game.width(),
            height: game.height(),
            cells: game.grid().iter().map(map).collect(),
        }
    }

    pub fn cell_at(&self, (x, y): Coord2) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self::from_game(game)
    }
}
