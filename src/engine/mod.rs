//! Core battleship puzzle engine (no_std compatible)
//!
//! Pure game logic: coordinates and occupancy sets, ship shapes, random fleet
//! placement, shot resolution and the observer hook used by presentation
//! layers. Only `alloc`, `num-traits`, `rand` and the `log` facade are needed,
//! so it can be used in embedded systems or compiled to WebAssembly.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod game;
pub mod session;
pub mod ship;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::{Board, CellStatus};
pub use common::BoardError;
pub use config::*;
pub use coord::Coord;
pub use fleet::{build_fleet, build_fleet_with, build_standard_fleet, Fit, Fleet};
pub use game::{CellView, Game, GameStatus, ShotKind, ShotOutcome};
pub use session::{Session, ShotObserver};
pub use ship::{Orientation, Rotation, Ship, ShipShape, CARRIER_OFFSETS};
