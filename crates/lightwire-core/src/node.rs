//! Grid nodes: the per-cell state of a board.

use std::fmt::{self, Display};

use crate::{Position, Side, SideSet, TileShape};

/// What occupies a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
    derive_more::IsVariant,
)]
pub enum NodeKind {
    /// Nothing; never conducts and is ignored by the win check.
    #[default]
    Empty,
    /// A conductor with at least two connectors.
    Wire,
    /// The single power source, with at least one connector.
    Source,
    /// A lamp with exactly one connector.
    Bulb,
}

impl NodeKind {
    /// Returns the minimum number of connectors a node of this kind must have.
    #[must_use]
    pub const fn min_arity(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Source | Self::Bulb => 1,
            Self::Wire => 2,
        }
    }

    /// Returns `true` if `arity` connectors satisfy this kind's invariant.
    #[must_use]
    pub const fn accepts_arity(self, arity: usize) -> bool {
        match self {
            Self::Empty => arity == 0,
            Self::Bulb => arity == 1,
            Self::Wire | Self::Source => arity >= self.min_arity() && arity <= 4,
        }
    }
}

/// The state of one board cell.
///
/// Nodes are owned by a [`Board`](crate::Board); callers only ever see shared
/// references. Rotation replaces the connector set in place and advances the
/// turn counter, whose value modulo 4 is the visible rotation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    position: Position,
    kind: NodeKind,
    sides: SideSet,
    powered: bool,
    turn_count: u32,
}

impl Node {
    pub(crate) fn empty(position: Position) -> Self {
        Self::new(position, NodeKind::Empty, SideSet::empty())
    }

    pub(crate) fn new(position: Position, kind: NodeKind, sides: SideSet) -> Self {
        debug_assert!(kind.accepts_arity(sides.len()));
        Self {
            position,
            kind,
            sides,
            powered: false,
            turn_count: 0,
        }
    }

    /// Returns the cell this node occupies.
    #[must_use]
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the node kind.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the current connector set.
    #[must_use]
    #[inline]
    pub fn sides(&self) -> SideSet {
        self.sides
    }

    /// Returns `true` if the node has a connector toward `side`.
    #[must_use]
    #[inline]
    pub fn connects(&self, side: Side) -> bool {
        self.sides.has(side)
    }

    /// Returns `true` if the node is energized.
    #[must_use]
    #[inline]
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Returns the raw turn counter.
    #[must_use]
    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Returns the visible rotation state, `turn_count mod 4`.
    #[must_use]
    #[inline]
    pub fn rotation(&self) -> u8 {
        u8::try_from(self.turn_count % 4).unwrap_or_default()
    }

    /// Returns the shape of the current connector set.
    #[must_use]
    pub fn shape(&self) -> TileShape {
        TileShape::of(self.sides)
    }

    /// Returns how many distinct quarter turns away from the placement
    /// orientation this node is, taking the shape's symmetry into account.
    ///
    /// A cross is always at orientation 0 and a straight alternates between 0
    /// and 1.
    #[must_use]
    pub fn orientation(&self) -> u8 {
        // every symmetry order divides 4
        self.rotation() % self.shape().symmetry_order()
    }

    /// Returns the number of clockwise turns needed to bring the node back to
    /// its placement orientation.
    #[must_use]
    pub fn turns_to_restore(&self) -> u8 {
        let order = self.shape().symmetry_order();
        (order - self.orientation()) % order
    }

    /// Rotates the connectors a quarter turn clockwise and advances the turn
    /// counter.
    ///
    /// A cross keeps its connector set but still counts the turn.
    pub fn rotate_clockwise(&mut self) {
        self.sides = self.sides.rotated_clockwise();
        self.turn_count = self.turn_count.wrapping_add(1);
    }

    /// Exact inverse of [`rotate_clockwise`](Self::rotate_clockwise).
    pub fn rotate_counter_clockwise(&mut self) {
        self.sides = self.sides.rotated_counter_clockwise();
        self.turn_count = self.turn_count.wrapping_sub(1);
    }

    pub(crate) fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.kind {
            NodeKind::Empty => 'E',
            NodeKind::Wire => 'L',
            NodeKind::Source => 'P',
            NodeKind::Bulb => 'B',
        };
        write!(
            f,
            "{{{letter}[{}@{}]{}}}",
            self.position.row(),
            self.position.col(),
            self.sides
        )
    }
}
