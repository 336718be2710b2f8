use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// One board position together with its hidden and player-visible attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub is_mine: bool,
    pub neighboring_mines: u8,
}

impl Cell {
    pub const fn new((x, y): Coord2) -> Self {
        Self {
            x,
            y,
            is_revealed: false,
            is_flagged: false,
            is_mine: false,
            neighboring_mines: 0,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed
    }
}
