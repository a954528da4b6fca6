//! Board coordinates.

use core::fmt;

/// A `(row, col)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on a `rows × cols` board.
    pub const fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Shift by a signed offset, returning `None` if the result leaves the board.
    pub fn offset(&self, dr: isize, dc: isize, rows: usize, cols: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let moved = Coord::new(row, col);
        moved.in_bounds(rows, cols).then_some(moved)
    }

    /// The 3×3 block centred on this coordinate, clipped to the board.
    pub fn neighborhood(self, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
        (-1isize..=1).flat_map(move |dr| {
            (-1isize..=1).filter_map(move |dc| self.offset(dr, dc, rows, cols))
        })
    }

    /// Chebyshev (king-move) distance between two coordinates.
    pub fn chebyshev(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// Column letter followed by 1-based row, e.g. `(3, 4)` is `E4`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col) {
            Ok(c) if c < 26 => write!(f, "{}{}", (b'A' + c) as char, self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
