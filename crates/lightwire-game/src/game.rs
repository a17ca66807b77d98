use lightwire_core::{Board, ListenerId, Node, Position, WinState};

use crate::{CommandStack, HistoryConfig, TurnCommand};

/// A circuit puzzle session.
///
/// Owns the board together with its turn history. Every turn, undo, and redo
/// leaves the board with freshly recomputed power and win state, and fires the
/// board's listeners synchronously before returning.
///
/// # Example
///
/// ```
/// use lightwire_core::{Board, Position, Side};
/// use lightwire_game::{Game, HistoryConfig};
///
/// let mut board = Board::new(1, 2)?;
/// board.place_source(Position::new(1, 1), &[Side::East])?;
/// board.place_bulb(Position::new(1, 2), Side::North)?;
/// board.recompute_power();
///
/// let mut game = Game::new(board, HistoryConfig::default());
/// assert!(!game.is_won());
///
/// // Three clockwise turns point the bulb west, toward the source.
/// for _ in 0..3 {
///     game.turn(Position::new(1, 2));
/// }
/// assert!(game.is_won());
///
/// game.undo();
/// assert!(!game.is_won());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Game {
    board: Board,
    history: CommandStack,
}

impl Game {
    /// Starts a session on `board` with an empty history.
    #[must_use]
    pub fn new(board: Board, config: HistoryConfig) -> Self {
        Self {
            board,
            history: CommandStack::new(config.capacity),
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ends the session, returning the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the turn history.
    #[must_use]
    pub fn history(&self) -> &CommandStack {
        &self.history
    }

    /// Returns the node at `pos`, if it is on the board.
    #[must_use]
    pub fn node_at(&self, pos: Position) -> Option<&Node> {
        self.board.node_at(pos)
    }

    /// Turns the tile at `pos` clockwise and records the turn.
    ///
    /// Returns `false` if `pos` is off the board or empty; nothing is recorded
    /// in that case. Turning stays possible after the puzzle is solved.
    pub fn turn(&mut self, pos: Position) -> bool {
        let turned = self.history.execute(TurnCommand::new(pos), &mut self.board);
        if turned {
            log::trace!("turned {pos}");
        }
        turned
    }

    /// Reverts the last turn. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.board)
    }

    /// Re-applies the last undone turn. Returns `false` if there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.board)
    }

    /// Returns `true` if [`undo`](Self::undo) would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if [`redo`](Self::redo) would do something.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Queues a recorded sequence of turns for replay through [`redo`](Self::redo).
    pub fn load_replay<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.history
            .load_redo(positions.into_iter().map(TurnCommand::new));
        log::debug!("loaded {} turn(s) for replay", self.history.redo_len());
    }

    /// Returns the positions of recorded turns, oldest first.
    #[must_use]
    pub fn recorded_turns(&self) -> Vec<Position> {
        self.history
            .entries()
            .map(|command| command.position())
            .collect()
    }

    /// Returns `true` if every non-empty tile is powered.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Returns the win state as of the last recomputation.
    #[must_use]
    pub fn win_state(&self) -> WinState {
        self.board.win_state()
    }

    /// Registers a listener for changes to the cell at `pos`.
    ///
    /// See [`Board::subscribe`].
    pub fn subscribe<F>(&mut self, pos: Position, listener: F) -> Option<ListenerId>
    where
        F: FnMut(&Node) + Send + 'static,
    {
        self.board.subscribe(pos, listener)
    }

    /// Registers a listener for win-state transitions.
    pub fn subscribe_win<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(WinState) + Send + 'static,
    {
        self.board.subscribe_win(listener)
    }

    /// Removes a listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.board.unsubscribe(id)
    }
}
