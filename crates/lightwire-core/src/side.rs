//! Cardinal connector sides and sets of sides.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// One of the four cardinal directions a tile can expose a connector toward.
///
/// The declaration order `North, East, South, West` is the clockwise cyclic
/// order used by rotation and the canonical order used for display.
///
/// # Examples
///
/// ```
/// use lightwire_core::Side;
///
/// assert_eq!(Side::North.opposite(), Side::South);
/// assert_eq!(Side::West.clockwise(), Side::North);
/// assert_eq!("east".parse::<Side>(), Ok(Side::East));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::IsVariant,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Toward row 1.
    North,
    /// Toward the last column.
    East,
    /// Toward the last row.
    South,
    /// Toward column 1.
    West,
}

impl Side {
    /// All sides in canonical (clockwise from north) order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the side facing this one across a shared cell edge.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns the side reached by a 90° clockwise turn.
    #[must_use]
    #[inline]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Returns the side reached by a 90° counter-clockwise turn.
    #[must_use]
    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// Returns the upper-case name used in level definitions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    const fn bit(self) -> SideSet {
        match self {
            Self::North => SideSet::NORTH,
            Self::East => SideSet::EAST,
            Self::South => SideSet::SOUTH,
            Self::West => SideSet::WEST,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a side name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown side name: {name:?}")]
pub struct ParseSideError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|side| side.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSideError { name: s.to_owned() })
    }
}

bitflags::bitflags! {
    /// A set of connector sides.
    ///
    /// Each side occupies one bit (north = bit 0 through west = bit 3), so a
    /// clockwise quarter turn is a 4-bit left rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightwire_core::{Side, SideSet};
    ///
    /// let corner = SideSet::from_sides([Side::North, Side::East]);
    /// let turned = corner.rotated_clockwise();
    /// assert_eq!(turned, SideSet::EAST | SideSet::SOUTH);
    /// assert_eq!(turned.sides().collect::<Vec<_>>(), [Side::East, Side::South]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SideSet: u8 {
        /// North connector.
        const NORTH = 0b0001;
        /// East connector.
        const EAST = 0b0010;
        /// South connector.
        const SOUTH = 0b0100;
        /// West connector.
        const WEST = 0b1000;
    }
}

impl SideSet {
    /// Builds a set from any collection of sides; duplicates collapse.
    #[must_use]
    pub fn from_sides<I>(sides: I) -> Self
    where
        I: IntoIterator<Item = Side>,
    {
        sides
            .into_iter()
            .fold(Self::empty(), |set, side| set | side.bit())
    }

    /// Returns the number of sides in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Returns `true` if `side` is in the set.
    #[must_use]
    #[inline]
    pub const fn has(self, side: Side) -> bool {
        self.contains(side.bit())
    }

    /// Iterates the sides in canonical `N, E, S, W` order.
    #[must_use]
    pub fn sides(self) -> impl DoubleEndedIterator<Item = Side> + Clone {
        Side::ALL.into_iter().filter(move |side| self.has(*side))
    }

    /// Returns the set rotated a quarter turn clockwise.
    #[must_use]
    #[inline]
    pub const fn rotated_clockwise(self) -> Self {
        let bits = self.bits();
        Self::from_bits_truncate((bits << 1) | (bits >> 3))
    }

    /// Returns the set rotated a quarter turn counter-clockwise.
    #[must_use]
    #[inline]
    pub const fn rotated_counter_clockwise(self) -> Self {
        let bits = self.bits();
        Self::from_bits_truncate((bits >> 1) | (bits << 3))
    }
}

impl From<Side> for SideSet {
    fn from(side: Side) -> Self {
        side.bit()
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<T: IntoIterator<Item = Side>>(iter: T) -> Self {
        Self::from_sides(iter)
    }
}

impl Display for SideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, side) in self.sides().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(&side, f)?;
        }
        f.write_str("]")
    }
}
