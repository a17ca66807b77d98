use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

use lightwire_core::Board;

use crate::TurnCommand;

/// Linear undo/redo history of turn commands.
///
/// Executing a new command discards everything that could have been redone.
/// The undo side is bounded; when full, the oldest command is forgotten.
#[derive(Debug, Clone)]
pub struct CommandStack {
    undo: VecDeque<TurnCommand>,
    redo: Vec<TurnCommand>,
    capacity: NonZero<usize>,
}

impl CommandStack {
    /// Creates an empty history holding at most `capacity` undoable commands.
    #[must_use]
    pub fn new(capacity: NonZero<usize>) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Returns the undo capacity.
    #[must_use]
    pub fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// Iterates undoable commands, oldest first.
    #[must_use]
    pub fn entries(&self) -> vec_deque::Iter<'_, TurnCommand> {
        self.undo.iter()
    }

    /// Returns the number of undoable commands.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Returns the number of redoable commands.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    fn record(&mut self, command: TurnCommand) {
        if self.undo.len() == self.capacity.get() {
            self.undo.pop_front();
        }
        self.undo.push_back(command);
    }

    /// Executes `command` against `board` and records it.
    ///
    /// The redo history is cleared. Returns `false`, recording nothing, if the
    /// command had no tile to turn.
    pub fn execute(&mut self, command: TurnCommand, board: &mut Board) -> bool {
        if !command.execute(board) {
            return false;
        }
        self.record(command);
        self.redo.clear();
        true
    }

    /// Returns `true` if there is a command to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Reverts the most recent command that still has a tile to turn.
    ///
    /// Commands whose tile has disappeared are dropped on the way. Returns
    /// `false` if nothing was reverted.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        while let Some(command) = self.undo.pop_back() {
            if command.undo(board) {
                self.redo.push(command);
                return true;
            }
            log::debug!("dropped undo of {} with no tile", command.position());
        }
        false
    }

    /// Returns `true` if there is a command to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Re-executes the most recently undone command.
    ///
    /// Commands with no tile to turn, such as off-board positions in a loaded
    /// replay, are dropped without being recorded. Returns `false` if nothing
    /// was executed.
    pub fn redo(&mut self, board: &mut Board) -> bool {
        while let Some(command) = self.redo.pop() {
            if command.execute(board) {
                self.record(command);
                return true;
            }
            log::debug!("dropped redo of {} with no tile", command.position());
        }
        false
    }

    /// Replaces the redo history with a recorded sequence, so that successive
    /// [`redo`](Self::redo) calls replay `commands` in order.
    pub fn load_redo<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = TurnCommand>,
    {
        self.redo = commands.into_iter().collect();
        self.redo.reverse();
    }

    /// Forgets all history without touching the board.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use lightwire_core::{Position, Side};

    use super::*;

    fn row_of_wires(len: u16) -> Board {
        let mut board = Board::new(1, len).unwrap();
        for col in 1..=len {
            board
                .place_wire(Position::new(1, col), &[Side::North, Side::East])
                .unwrap();
        }
        board
    }

    fn turns(board: &Board) -> Vec<u8> {
        board.nodes().map(lightwire_core::Node::rotation).collect()
    }

    fn cmd(col: u16) -> TurnCommand {
        TurnCommand::new(Position::new(1, col))
    }

    #[test]
    fn undo_redo_roundtrip() {
        let mut board = row_of_wires(3);
        let mut history = CommandStack::new(NonZero::new(10).unwrap());
        assert!(history.execute(cmd(1), &mut board));
        assert!(history.execute(cmd(2), &mut board));
        assert!(history.execute(cmd(2), &mut board));
        assert_eq!(turns(&board), [1, 2, 0]);

        assert!(history.undo(&mut board));
        assert_eq!(turns(&board), [1, 1, 0]);
        assert!(history.undo(&mut board));
        assert!(history.undo(&mut board));
        assert_eq!(turns(&board), [0, 0, 0]);
        assert!(!history.undo(&mut board));

        assert!(history.redo(&mut board));
        assert!(history.redo(&mut board));
        assert!(history.redo(&mut board));
        assert_eq!(turns(&board), [1, 2, 0]);
        assert!(!history.redo(&mut board));
    }

    #[test]
    fn redo_clears_after_execute() {
        let mut board = row_of_wires(3);
        let mut history = CommandStack::new(NonZero::new(10).unwrap());
        history.execute(cmd(1), &mut board);
        history.execute(cmd(2), &mut board);
        history.undo(&mut board);
        assert!(history.can_redo());

        history.execute(cmd(3), &mut board);
        assert!(!history.can_redo());
        assert!(!history.redo(&mut board));
        assert_eq!(turns(&board), [1, 0, 1]);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut board = row_of_wires(3);
        let mut history = CommandStack::new(NonZero::new(2).unwrap());
        history.execute(cmd(1), &mut board);
        history.execute(cmd(2), &mut board);
        history.execute(cmd(3), &mut board);
        assert_eq!(history.undo_len(), 2);

        assert!(history.undo(&mut board));
        assert!(history.undo(&mut board));
        assert!(!history.undo(&mut board));
        assert_eq!(turns(&board), [1, 0, 0]);
    }

    #[test]
    fn empty_cell_is_not_recorded() {
        let mut board = Board::new(1, 2).unwrap();
        board
            .place_wire(Position::new(1, 1), &[Side::North, Side::South])
            .unwrap();
        let mut history = CommandStack::new(NonZero::new(5).unwrap());

        assert!(!history.execute(cmd(2), &mut board));
        assert!(!history.execute(cmd(9), &mut board));
        assert!(!history.can_undo());
    }

    #[test]
    fn load_redo_replays_in_order() {
        let mut board = row_of_wires(3);
        let mut history = CommandStack::new(NonZero::new(5).unwrap());
        history.load_redo([cmd(3), cmd(1), cmd(3)]);
        assert_eq!(history.redo_len(), 3);

        assert!(history.redo(&mut board));
        assert_eq!(turns(&board), [0, 0, 1]);
        assert!(history.redo(&mut board));
        assert_eq!(turns(&board), [1, 0, 1]);
        assert!(history.redo(&mut board));
        assert_eq!(turns(&board), [1, 0, 2]);
        assert_eq!(
            history.entries().copied().collect::<Vec<_>>(),
            [cmd(3), cmd(1), cmd(3)]
        );
    }

    #[test]
    fn redo_skips_commands_without_tile() {
        let mut board = Board::new(1, 2).unwrap();
        board
            .place_wire(Position::new(1, 1), &[Side::North, Side::South])
            .unwrap();
        let mut history = CommandStack::new(NonZero::new(5).unwrap());
        history.load_redo([cmd(9), cmd(1), cmd(2)]);

        assert!(history.redo(&mut board));
        assert_eq!(turns(&board), [1, 0]);
        assert_eq!(history.entries().copied().collect::<Vec<_>>(), [cmd(1)]);

        // only the empty cell is left to replay
        assert!(!history.redo(&mut board));
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
        assert_eq!(turns(&board), [1, 0]);
    }

    #[test]
    fn redo_of_only_invalid_commands_changes_nothing() {
        let mut board = Board::new(1, 2).unwrap();
        board
            .place_wire(Position::new(1, 1), &[Side::North, Side::South])
            .unwrap();
        let mut history = CommandStack::new(NonZero::new(5).unwrap());
        history.load_redo([TurnCommand::new(Position::new(9, 9))]);

        assert!(!history.redo(&mut board));
        assert!(!history.can_undo());
        assert!(!history.undo(&mut board));
        assert_eq!(turns(&board), [0, 0]);
    }

    #[test]
    fn undo_skips_tiles_that_were_removed() {
        let mut board = Board::new(1, 2).unwrap();
        board
            .place_wire(Position::new(1, 1), &[Side::North, Side::South])
            .unwrap();
        board
            .place_wire(Position::new(1, 2), &[Side::North, Side::South])
            .unwrap();
        let mut history = CommandStack::new(NonZero::new(5).unwrap());
        history.execute(cmd(1), &mut board);
        history.execute(cmd(2), &mut board);

        let mut cleared = Board::new(1, 2).unwrap();
        cleared
            .place_wire(Position::new(1, 1), &[Side::East, Side::West])
            .unwrap();
        assert!(history.undo(&mut cleared));
        assert_eq!(turns(&cleared), [3, 0]);
        assert!(!history.can_undo());
        assert_eq!(history.redo_len(), 1);
    }

    #[test]
    fn clear_resets_history() {
        let mut board = row_of_wires(1);
        let mut history = CommandStack::new(NonZero::new(5).unwrap());
        history.execute(cmd(1), &mut board);
        history.execute(cmd(1), &mut board);
        history.undo(&mut board);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(turns(&board), [1]);
    }
}
