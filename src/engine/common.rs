//! Errors shared by the placement engine, the board and the game controller.

use crate::engine::bitboard::BitBoardError;

/// Errors returned by Board, Fleet and Game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// A ship resolved to a different number of cells than it declares, or
    /// declares a size outside the supported range.
    InvalidShipSize { declared: usize, actual: usize },
    /// Shot requested outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship shape does not fit on the board at the requested anchor.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Every position for a ship of this size touches the ships already placed.
    NoRoom { size: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidShipSize { declared, actual } => write!(
                f,
                "Invalid ship size: declared {} but occupies {} cells",
                declared, actual
            ),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Shot at row {}, col {} is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::NoRoom { size } => {
                write!(f, "No room left for a ship of size {}", size)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
