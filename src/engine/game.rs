use rand::Rng;

use crate::engine::{
    board::CellStatus,
    common::BoardError,
    config::{GameBoard, GameFleet, BOARD_COLS, BOARD_ROWS, FLEET_SIZES},
    coord::Coord,
    fleet::build_fleet,
};

/// Classification of a single fire request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotKind {
    Miss,
    Hit,
    /// The cell had already been resolved; counted as a shot, never as a hit.
    Repeated,
    /// The game was already won; nothing changed.
    IgnoredGameOver,
}

/// Result of `Game::fire`, carrying the counters as they stand afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub kind: ShotKind,
    /// Size of the ship hit, only for `ShotKind::Hit`.
    pub ship_size: Option<usize>,
    pub hit_count_after: usize,
    pub shot_count_after: usize,
    pub won: bool,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// What the player is allowed to see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Unknown,
    Water,
    Hit { ship_size: usize },
}

/// Game controller: owns the fleet and the board and is the only thing that
/// mutates them.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: GameFleet,
    board: GameBoard,
    hit_count: usize,
    shot_count: usize,
    win_count: usize,
}

impl Game {
    /// Start a game with the standard fleet placed at random.
    pub fn new<G: Rng + ?Sized>(rng: &mut G) -> Result<Self, BoardError> {
        Self::with_sizes(rng, &FLEET_SIZES)
    }

    /// Start a game with a custom list of ship sizes placed at random.
    pub fn with_sizes<G: Rng + ?Sized>(rng: &mut G, sizes: &[usize]) -> Result<Self, BoardError> {
        Ok(Self::with_fleet(build_fleet(rng, sizes)?))
    }

    /// Start a game with an already placed fleet.
    pub fn with_fleet(fleet: GameFleet) -> Self {
        let win_count = fleet.occupied_cells();
        log::info!(
            "new game: {} ship(s), {} cell(s) to hit",
            fleet.len(),
            win_count
        );
        Game {
            fleet,
            board: GameBoard::new(),
            hit_count: 0,
            shot_count: 0,
            win_count,
        }
    }

    /// Fire at (`row`, `col`).
    ///
    /// Out-of-range coordinates are rejected before anything else and leave
    /// the game untouched.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        self.fire_at(Coord::new(row, col))
    }

    pub fn fire_at(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !coord.in_bounds(BOARD_ROWS, BOARD_COLS) {
            return Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        if self.is_won() {
            return Ok(self.outcome(ShotKind::IgnoredGameOver, None));
        }

        self.shot_count += 1;
        let ship_size = self.fleet.ship_at(coord).map(|s| s.size());
        if !self.board.record(coord, ship_size.is_some())? {
            return Ok(self.outcome(ShotKind::Repeated, None));
        }

        match ship_size {
            Some(size) => {
                self.hit_count += 1;
                if self.is_won() {
                    log::info!("all ships sunk after {} shot(s)", self.shot_count);
                }
                Ok(self.outcome(ShotKind::Hit, Some(size)))
            }
            None => Ok(self.outcome(ShotKind::Miss, None)),
        }
    }

    fn outcome(&self, kind: ShotKind, ship_size: Option<usize>) -> ShotOutcome {
        ShotOutcome {
            kind,
            ship_size,
            hit_count_after: self.hit_count,
            shot_count_after: self.shot_count,
            won: self.is_won(),
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn shot_count(&self) -> usize {
        self.shot_count
    }

    /// Hits needed to win.
    pub fn win_count(&self) -> usize {
        self.win_count
    }

    pub fn is_won(&self) -> bool {
        self.hit_count == self.win_count
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn fleet(&self) -> &GameFleet {
        &self.fleet
    }

    /// Player-visible state of a cell.
    pub fn cell(&self, coord: Coord) -> Result<CellView, BoardError> {
        Ok(match self.board.status(coord)? {
            CellStatus::Unshot => CellView::Unknown,
            CellStatus::Missed => CellView::Water,
            CellStatus::Hit => CellView::Hit {
                ship_size: self.fleet.ship_at(coord).map_or(0, |s| s.size()),
            },
        })
    }
}
