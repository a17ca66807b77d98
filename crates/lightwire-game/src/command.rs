use lightwire_core::{Board, Position};

/// A reversible quarter turn of the tile at one position.
///
/// The command holds the position, not the node, so it stays valid for as
/// long as the board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TurnCommand {
    position: Position,
}

impl TurnCommand {
    /// Creates a command turning the tile at `position`.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }

    /// Returns the targeted position.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Turns the tile clockwise. Returns `false` if there is no tile to turn.
    pub fn execute(self, board: &mut Board) -> bool {
        board.rotate_clockwise(self.position)
    }

    /// Turns the tile counter-clockwise, reverting [`execute`](Self::execute).
    pub fn undo(self, board: &mut Board) -> bool {
        board.rotate_counter_clockwise(self.position)
    }
}

impl From<Position> for TurnCommand {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}
