//! Board geometry and fleet definition.

use crate::engine::bitboard::BitBoard;
use crate::engine::board::Board;
use crate::engine::fleet::Fleet;
use crate::engine::ship::Ship;

pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;

/// Ship sizes in placement order. The carrier goes first while the board is
/// still empty.
pub const NUM_SHIPS: usize = 11;
pub const FLEET_SIZES: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Ships of this size are built with the carrier shape instead of a straight line.
pub const CARRIER_SIZE: usize = 5;
pub const MIN_SHIP_SIZE: usize = 1;
pub const MAX_SHIP_SIZE: usize = 5;

/// Occupancy set for the standard board.
pub type Grid = BitBoard<u128, BOARD_ROWS, BOARD_COLS>;
pub type GameShip = Ship<u128, BOARD_ROWS, BOARD_COLS>;
pub type GameFleet = Fleet<u128, BOARD_ROWS, BOARD_COLS>;
pub type GameBoard = Board<u128, BOARD_ROWS, BOARD_COLS>;
