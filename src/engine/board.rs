//! Per-cell shot state, kept as a pair of `BitBoard`s.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::engine::bitboard::BitBoard;
use crate::engine::common::BoardError;
use crate::engine::coord::Coord;

/// Shot state of a single cell. `Missed` and `Hit` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    Unshot,
    Missed,
    Hit,
}

/// Records which cells have been shot and whether each shot found a ship.
/// Which ship sits where is the fleet's business, not the board's.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    hits: BitBoard<T, R, C>,
    misses: BitBoard<T, R, C>,
}

impl<T, const R: usize, const C: usize> Board<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create a board with every cell unshot.
    pub fn new() -> Self {
        Board {
            hits: BitBoard::new(),
            misses: BitBoard::new(),
        }
    }

    pub fn status(&self, coord: Coord) -> Result<CellStatus, BoardError> {
        if self.hits.get(coord.row, coord.col)? {
            Ok(CellStatus::Hit)
        } else if self.misses.get(coord.row, coord.col)? {
            Ok(CellStatus::Missed)
        } else {
            Ok(CellStatus::Unshot)
        }
    }

    /// Resolve a shot at `coord`, `hit` telling whether a ship occupies it.
    ///
    /// Returns `true` if the cell was unshot and has now transitioned, `false`
    /// if it had already been resolved (the board is left untouched).
    pub fn record(&mut self, coord: Coord, hit: bool) -> Result<bool, BoardError> {
        if self.status(coord)? != CellStatus::Unshot {
            return Ok(false);
        }
        if hit {
            self.hits.insert(coord)?;
        } else {
            self.misses.insert(coord)?;
        }
        Ok(true)
    }

    pub fn hits(&self) -> BitBoard<T, R, C> {
        self.hits
    }

    pub fn misses(&self) -> BitBoard<T, R, C> {
        self.misses
    }

    /// Cells that have been shot at least once.
    pub fn shot(&self) -> BitBoard<T, R, C> {
        self.hits | self.misses
    }

    /// Cells still open to a first shot, in row-major order.
    pub fn unshot(&self) -> impl Iterator<Item = Coord> {
        let open = !self.shot();
        (0..R * C)
            .map(|idx| Coord::new(idx / C, idx % C))
            .filter(move |&cell| open.contains(cell))
    }
}

impl<T, const R: usize, const C: usize> Default for Board<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for Board<T, R, C>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  hits: {:?},\n  misses: {:?}\n}}",
            self.hits, self.misses
        )
    }
}
