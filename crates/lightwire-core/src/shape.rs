use crate::{Side, SideSet};

/// Geometric shape of a connector set, independent of its orientation.
///
/// Views use this to choose a tile glyph and orientation; the engine uses the
/// rotational symmetry to report how far a tile is from its placement
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum TileShape {
    /// No connectors.
    Empty,
    /// A single connector pointing toward `facing`.
    End {
        /// Direction of the only connector.
        facing: Side,
    },
    /// Two opposite connectors.
    Straight {
        /// `true` for a north/south pair, `false` for east/west.
        vertical: bool,
    },
    /// Two adjacent connectors; `from` is the first of the pair in clockwise order.
    Corner {
        /// The counter-clockwise side of the corner (e.g. `North` for north/east).
        from: Side,
    },
    /// Three connectors; `missing` is the absent side.
    Tee {
        /// The side without a connector.
        missing: Side,
    },
    /// All four connectors (the rotation-invariant universal tile).
    Cross,
}

impl TileShape {
    /// Classifies a connector set.
    #[must_use]
    pub fn of(sides: SideSet) -> Self {
        let mut iter = sides.sides();
        match sides.len() {
            0 => Self::Empty,
            1 => match iter.next() {
                Some(facing) => Self::End { facing },
                None => Self::Empty,
            },
            2 => {
                let (Some(a), Some(b)) = (iter.next(), iter.next()) else {
                    return Self::Empty;
                };
                if a.opposite() == b {
                    Self::Straight {
                        vertical: a == Side::North,
                    }
                } else if a.clockwise() == b {
                    Self::Corner { from: a }
                } else {
                    // west/north wraps around the cyclic order
                    Self::Corner { from: b }
                }
            }
            3 => match (SideSet::all() - sides).sides().next() {
                Some(missing) => Self::Tee { missing },
                None => Self::Cross,
            },
            _ => Self::Cross,
        }
    }

    /// Number of distinct orientations the shape takes under quarter turns.
    ///
    /// A cross looks the same after any turn, a straight after two, and every
    /// other non-empty shape only after four.
    #[must_use]
    pub const fn symmetry_order(self) -> u8 {
        match self {
            Self::Empty | Self::Cross => 1,
            Self::Straight { .. } => 2,
            Self::End { .. } | Self::Corner { .. } | Self::Tee { .. } => 4,
        }
    }
}
