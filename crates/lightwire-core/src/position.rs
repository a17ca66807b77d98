//! Board position type.

use std::fmt::{self, Display};

use crate::Side;

/// A cell position on a board, addressed by 1-indexed row and column.
///
/// Positions are plain values; whether a position lies on a particular board is
/// decided by [`Board::contains`](crate::Board::contains).
///
/// # Examples
///
/// ```
/// use lightwire_core::{Position, Side};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.neighbor(Side::North), Some(Position::new(1, 3)));
/// assert_eq!(pos.neighbor(Side::East), Some(Position::new(2, 4)));
///
/// // Row 0 is not addressable.
/// assert_eq!(Position::new(1, 1).neighbor(Side::North), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Position {
    row: u16,
    col: u16,
}

impl Position {
    /// Creates a position from a 1-indexed row and column.
    #[must_use]
    #[inline]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Returns the 1-indexed row.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u16 {
        self.row
    }

    /// Returns the 1-indexed column.
    #[must_use]
    #[inline]
    pub const fn col(self) -> u16 {
        self.col
    }

    /// Returns the position one cell away in the direction of `side`.
    ///
    /// Returns `None` when the step would leave the addressable range
    /// (row or column 0, or past `u16::MAX`). Board bounds are not checked here.
    #[must_use]
    pub fn neighbor(self, side: Side) -> Option<Self> {
        let Self { row, col } = self;
        let (row, col) = match side {
            Side::North => (row.checked_sub(1)?, col),
            Side::East => (row, col.checked_add(1)?),
            Side::South => (row.checked_add(1)?, col),
            Side::West => (row, col.checked_sub(1)?),
        };
        if row == 0 || col == 0 {
            return None;
        }
        Some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
