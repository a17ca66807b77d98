//! Plain-data tile definitions for loading and persisting boards.

use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use crate::{NodeKind, ParseSideError, Position, Side};

/// Kind of a placeable (non-empty) tile.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::IsVariant,
)]
pub enum TileKind {
    /// A wire (`L` in level lines).
    Wire,
    /// A bulb (`B` in level lines).
    Bulb,
    /// The power source (`P` in level lines).
    Source,
}

impl TileKind {
    /// Returns the single-letter code used in level lines.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Wire => 'L',
            Self::Bulb => 'B',
            Self::Source => 'P',
        }
    }

    /// Looks up a kind by its level-line letter.
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "L" | "l" => Some(Self::Wire),
            "B" | "b" => Some(Self::Bulb),
            "P" | "p" => Some(Self::Source),
            _ => None,
        }
    }
}

impl From<TileKind> for NodeKind {
    fn from(kind: TileKind) -> Self {
        match kind {
            TileKind::Wire => NodeKind::Wire,
            TileKind::Bulb => NodeKind::Bulb,
            TileKind::Source => NodeKind::Source,
        }
    }
}

/// One placed tile: what it is, where it is, and which sides it connects.
///
/// This is the exchange format between the engine and external loaders or
/// persisters. [`Board::tile_defs`](crate::Board::tile_defs) produces it and
/// [`Board::from_tile_defs`](crate::Board::from_tile_defs) consumes it.
///
/// The `Display`/`FromStr` form is a single whitespace-separated line:
///
/// ```
/// use lightwire_core::{Position, Side, TileDef, TileKind};
///
/// let def: TileDef = "L 2 3 north east".parse()?;
/// assert_eq!(def.kind, TileKind::Wire);
/// assert_eq!(def.position, Position::new(2, 3));
/// assert_eq!(def.sides, [Side::North, Side::East]);
/// assert_eq!(def.to_string(), "L 2 3 NORTH EAST");
/// # Ok::<(), lightwire_core::TileDefParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TileDef {
    /// Tile kind.
    pub kind: TileKind,
    /// Cell the tile occupies.
    pub position: Position,
    /// Connector sides.
    pub sides: Vec<Side>,
}

impl TileDef {
    /// Creates a definition.
    #[must_use]
    pub fn new(kind: TileKind, position: Position, sides: impl IntoIterator<Item = Side>) -> Self {
        Self {
            kind,
            position,
            sides: sides.into_iter().collect(),
        }
    }
}

impl Display for TileDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind.letter(),
            self.position.row(),
            self.position.col()
        )?;
        for side in &self.sides {
            write!(f, " {side}")?;
        }
        Ok(())
    }
}

/// Errors produced when parsing a [`TileDef`] line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TileDefParseError {
    /// The line has fewer than three fields.
    #[display("tile definition is missing fields")]
    MissingFields,
    /// The kind letter is not `L`, `B`, or `P`.
    #[display("unknown tile kind: {_0:?}")]
    UnknownKind(#[error(not(source))] String),
    /// A row or column is not a valid number.
    #[display("invalid coordinate: {_0}")]
    InvalidCoordinate(ParseIntError),
    /// A side name is not recognized.
    #[display("{_0}")]
    InvalidSide(ParseSideError),
}

impl FromStr for TileDef {
    type Err = TileDefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let (Some(kind), Some(row), Some(col)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(TileDefParseError::MissingFields);
        };
        let kind = TileKind::from_letter(kind)
            .ok_or_else(|| TileDefParseError::UnknownKind(kind.to_owned()))?;
        let row = row.parse().map_err(TileDefParseError::InvalidCoordinate)?;
        let col = col.parse().map_err(TileDefParseError::InvalidCoordinate)?;
        let sides = fields
            .map(str::parse)
            .collect::<Result<Vec<Side>, _>>()
            .map_err(TileDefParseError::InvalidSide)?;
        Ok(Self {
            kind,
            position: Position::new(row, col),
            sides,
        })
    }
}
