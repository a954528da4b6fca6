//! Ship shapes and immutable placed ships backed by a `BitBoard` mask.

use alloc::vec::Vec;
use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::engine::bitboard::{BitBoard, Cells};
use crate::engine::common::BoardError;
use crate::engine::config::{CARRIER_SIZE, MAX_SHIP_SIZE, MIN_SHIP_SIZE};
use crate::engine::coord::Coord;

/// Canonical carrier footprint relative to its anchor, drawn as a "T":
/// a three-cell arm along the top and a two-cell stem below its middle cell.
pub const CARRIER_OFFSETS: [(isize, isize); CARRIER_SIZE] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];

/// Orientation of a linear ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Carrier rotation in clockwise quarter turns from the canonical "T".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// T
    Up,
    /// ┤
    Right,
    /// ⟂
    Down,
    /// ├
    Left,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::Up, Rotation::Right, Rotation::Down, Rotation::Left];

    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Up => 0,
            Rotation::Right => 1,
            Rotation::Down => 2,
            Rotation::Left => 3,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Rotation::Up => 'T',
            Rotation::Right => '┤',
            Rotation::Down => '⟂',
            Rotation::Left => '├',
        }
    }

    /// Rotate an offset clockwise by this rotation.
    pub fn apply(self, (dr, dc): (isize, isize)) -> (isize, isize) {
        (0..self.quarter_turns()).fold((dr, dc), |(r, c), _| (c, -r))
    }
}

/// Shape of a ship, independent of where it is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipShape {
    Linear(Orientation),
    Carrier(Rotation),
}

impl ShipShape {
    /// Shapes a ship of `size` may take during placement.
    pub fn candidates(size: usize) -> Vec<ShipShape> {
        if size == CARRIER_SIZE {
            Rotation::ALL.iter().map(|&r| ShipShape::Carrier(r)).collect()
        } else {
            [Orientation::Horizontal, Orientation::Vertical]
                .iter()
                .map(|&o| ShipShape::Linear(o))
                .collect()
        }
    }

    /// Cell offsets relative to the anchor. The anchor itself is always `(0, 0)`.
    pub fn offsets(self, size: usize) -> Vec<(isize, isize)> {
        match self {
            ShipShape::Linear(Orientation::Horizontal) => {
                (0..size as isize).map(|i| (0, i)).collect()
            }
            ShipShape::Linear(Orientation::Vertical) => {
                (0..size as isize).map(|i| (i, 0)).collect()
            }
            ShipShape::Carrier(rotation) => {
                CARRIER_OFFSETS.iter().map(|&o| rotation.apply(o)).collect()
            }
        }
    }

    /// Inclusive anchor ranges `(rows, cols)` that keep every offset on a
    /// `rows × cols` board, or `None` if the shape cannot fit at all.
    pub fn anchor_bounds(
        self,
        size: usize,
        rows: usize,
        cols: usize,
    ) -> Option<((usize, usize), (usize, usize))> {
        let offsets = self.offsets(size);
        let min_r = offsets.iter().map(|o| o.0).min().unwrap_or(0);
        let max_r = offsets.iter().map(|o| o.0).max().unwrap_or(0);
        let min_c = offsets.iter().map(|o| o.1).min().unwrap_or(0);
        let max_c = offsets.iter().map(|o| o.1).max().unwrap_or(0);

        let row_lo = usize::try_from(-min_r).ok()?;
        let col_lo = usize::try_from(-min_c).ok()?;
        let row_hi = usize::try_from(rows as isize - 1 - max_r).ok()?;
        let col_hi = usize::try_from(cols as isize - 1 - max_c).ok()?;
        if row_lo > row_hi || col_lo > col_hi {
            return None;
        }
        Some(((row_lo, row_hi), (col_lo, col_hi)))
    }
}

/// A ship placed on an R×C board. Immutable once built; hits are tracked by
/// the board, not here.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    shape: ShipShape,
    anchor: Coord,
    mask: BitBoard<T, R, C>,
}

impl<T, const R: usize, const C: usize> Ship<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Build a ship of `size` with `shape` anchored at `anchor`.
    ///
    /// Fails with `ShipOutOfBounds` if any cell would leave the board, and with
    /// `InvalidShipSize` if the size is unsupported or the shape resolves to a
    /// different number of cells.
    pub fn new(size: usize, shape: ShipShape, anchor: Coord) -> Result<Self, BoardError> {
        if !(MIN_SHIP_SIZE..=MAX_SHIP_SIZE).contains(&size) {
            return Err(BoardError::InvalidShipSize {
                declared: size,
                actual: 0,
            });
        }

        let mut mask = BitBoard::<T, R, C>::try_new()?;
        for (dr, dc) in shape.offsets(size) {
            let cell = anchor
                .offset(dr, dc, R, C)
                .ok_or(BoardError::ShipOutOfBounds)?;
            mask.insert(cell)?;
        }

        let actual = mask.count_ones();
        if actual != size {
            return Err(BoardError::InvalidShipSize {
                declared: size,
                actual,
            });
        }

        Ok(Ship {
            size,
            shape,
            anchor,
            mask,
        })
    }

    /// Straight ship starting at `anchor` and extending right or down.
    pub fn linear(size: usize, orientation: Orientation, anchor: Coord) -> Result<Self, BoardError> {
        Self::new(size, ShipShape::Linear(orientation), anchor)
    }

    /// Five-cell carrier with its arm starting at `anchor`.
    pub fn carrier(rotation: Rotation, anchor: Coord) -> Result<Self, BoardError> {
        Self::new(CARRIER_SIZE, ShipShape::Carrier(rotation), anchor)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn shape(&self) -> ShipShape {
        self.shape
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, R, C> {
        self.mask
    }

    pub fn cells(&self) -> Cells<'_, T, R, C> {
        self.mask.iter()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.mask.contains(coord)
    }

    /// The ship's cells plus the one-cell margin around them.
    pub fn exclusion_zone(&self) -> BitBoard<T, R, C> {
        self.mask.dilate()
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for Ship<T, R, C>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, anchor: {}, shape: {:?}, mask: {:?} }}",
            self.size, self.anchor, self.shape, self.mask,
        )
    }
}
