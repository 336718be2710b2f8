use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game from the first move to a win or a loss.
///
/// Owns its [`Grid`] exclusively. Mutating calls are no-ops once the game is
/// finished; out-of-range coordinates are rejected with
/// [`GameError::InvalidCoords`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    grid: Grid,
    state: GameState,
    mine_count: CellCount,
    flags_remaining: i32,
    safe_revealed: CellCount,
    triggered_mine: Option<Coord2>,
    #[serde(skip)]
    started_at: Option<Instant>,
    #[serde(skip)]
    ended_at: Option<Instant>,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        let mine_count = grid.mine_count();
        let flagged = grid.count_cells(|cell| cell.is_flagged);
        let safe_revealed = grid.count_cells(|cell| cell.is_revealed && !cell.is_mine);
        Self {
            grid,
            state: GameState::InProgress,
            mine_count,
            flags_remaining: i32::from(mine_count) - i32::from(flagged),
            safe_revealed,
            triggered_mine: None,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> Coord {
        self.grid.width()
    }

    pub fn height(&self) -> Coord {
        self.grid.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Mines minus placed flags, negative when over-flagged.
    pub fn flags_remaining(&self) -> i32 {
        self.flags_remaining
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords]
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.grid.count_cells(Cell::is_hidden)
    }

    /// Time since the first safe reveal, frozen once the game ends.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .ended_at
                .unwrap_or_else(Instant::now)
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }

    /// Whether revealing the already opened cell at `coords` would open its neighbors.
    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        if self.state.is_finished() || !self.grid.contains(coords) {
            return false;
        }

        let cell = self.grid[coords];
        cell.is_revealed && cell.neighboring_mines == self.count_flagged_neighbors(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        let cell = &mut self.grid[coords];
        if self.state.is_finished() || cell.is_revealed {
            return Ok(MarkOutcome::NoChange);
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flags_remaining -= 1;
        } else {
            self.flags_remaining += 1;
        }
        Ok(MarkOutcome::Changed)
    }

    /// Opens a hidden cell, or chords an opened one.
    ///
    /// Flags do not block a direct reveal; an opened cell loses its flag.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        Ok(self.run_reveal(coords))
    }

    /// Depth-first reveal driven by an explicit stack of neighbor walks.
    ///
    /// Every neighbor a walk yields is handled like a fresh reveal: hidden
    /// cells open, opened cells get the chord check. Cascades therefore chord
    /// through opened numbers whose flags add up, and a wrong flag there
    /// detonates a mine.
    fn run_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let mut stack = Vec::new();
        let mut outcome = self.visit(coords, &mut stack);

        while let Some(walk) = stack.last_mut() {
            if self.state.is_finished() {
                break;
            }

            let Some(pos) = walk.neighbors.next() else {
                let walk = stack.pop();
                if matches!(walk, Some(NeighborWalk { kind: WalkKind::Cascade, .. })) {
                    outcome = outcome | self.check_won();
                }
                continue;
            };

            // chords re-check at visit time, earlier visits may have opened the cell
            if walk.kind == WalkKind::Chord {
                let cell = self.grid[pos];
                if cell.is_revealed || cell.is_flagged {
                    continue;
                }
            }
            outcome = outcome | self.visit(pos, &mut stack);
        }
        outcome
    }

    fn visit(&mut self, coords: Coord2, stack: &mut Vec<NeighborWalk>) -> RevealOutcome {
        let cell = &mut self.grid[coords];

        if cell.is_revealed {
            if self.can_chord_at(coords) {
                log::trace!("Chording at {:?}", coords);
                stack.push(NeighborWalk::new(coords, self.grid.size(), WalkKind::Chord));
            }
            return RevealOutcome::NoChange;
        }

        if cell.is_mine {
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return RevealOutcome::HitMine;
        }

        cell.is_revealed = true;
        if cell.is_flagged {
            cell.is_flagged = false;
            self.flags_remaining += 1;
        }
        let neighboring_mines = cell.neighboring_mines;
        self.safe_revealed += 1;
        self.mark_started();
        log::trace!(
            "Opened cell at {:?}, mine count: {}",
            coords,
            neighboring_mines
        );

        if neighboring_mines == 0 {
            stack.push(NeighborWalk::new(coords, self.grid.size(), WalkKind::Cascade));
            RevealOutcome::Revealed
        } else {
            RevealOutcome::Revealed | self.check_won()
        }
    }

    fn check_won(&mut self) -> RevealOutcome {
        if !self.state.is_finished()
            && self.grid.total_cells() - self.safe_revealed == self.mine_count
        {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::NoChange
        }
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.grid.count_neighbors(coords, |cell| cell.is_flagged)
    }

    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            let now = Instant::now();
            log::debug!("Game started at {:?}", now);
            self.started_at = Some(now);
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            GameState::Won
        } else {
            GameState::Lost
        };

        let now = Instant::now();
        self.started_at.get_or_insert(now);
        self.ended_at = Some(now);
        log::debug!(
            "Game ended with {:?} after {:?}, triggered mine: {:?}",
            self.state,
            self.elapsed(),
            self.triggered_mine
        );

        if !won {
            self.reveal_mines();
        }
    }

    fn reveal_mines(&mut self) {
        for cell in self.grid.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum WalkKind {
    /// Every neighbor of an opened blank cell.
    Cascade,
    /// Hidden, unflagged neighbors of a satisfied number.
    Chord,
}

#[derive(Debug)]
struct NeighborWalk {
    neighbors: NeighborIter,
    kind: WalkKind,
}

impl NeighborWalk {
    fn new(center: Coord2, bounds: Coord2, kind: WalkKind) -> Self {
        Self {
            neighbors: neighbors_of(center, bounds),
            kind,
        }
    }
}
