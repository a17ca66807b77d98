use crate::{NodeKind, Position};

/// Errors that prevent a board from being constructed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Rows or columns were zero.
    #[display("invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: u16,
        /// Requested column count.
        cols: u16,
    },
    /// A tile definition could not be placed while rebuilding a board.
    #[display("tile definition #{index} rejected: {source}")]
    InvalidTile {
        /// Index of the rejected definition.
        index: usize,
        /// Why it was rejected.
        source: PlacementError,
    },
}

/// Reasons a placement is rejected. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The position lies outside the board.
    #[display("position {position} is out of bounds")]
    OutOfBounds {
        /// Rejected position.
        position: Position,
    },
    /// A source was already placed on this board.
    #[display("board already has a power source")]
    DuplicateSource,
    /// The connector count does not fit the node kind.
    #[display("{kind:?} cannot have {arity} connector(s)")]
    InvalidArity {
        /// Kind being placed.
        kind: NodeKind,
        /// Number of distinct connectors supplied.
        arity: usize,
    },
}
