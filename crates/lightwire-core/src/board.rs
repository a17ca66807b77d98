//! The puzzle board: an owned arena of nodes with placement, rotation, power
//! propagation, and win evaluation.

use crate::{
    BoardError, ListenerId, Node, NodeKind, PlacementError, Position, Side, SideSet, TileDef,
    TileKind, WinState,
    notifier::{ChangeNotifier, NodeListener, WinListener},
    power,
};

/// A rectangular circuit puzzle board.
///
/// Cells are stored row-major in a single vector and addressed by 1-indexed
/// [`Position`]. At most one source can ever be placed on a board.
///
/// Mutations run to completion before returning. Rotations are followed by a
/// power recomputation, so observers never see a half-updated board. Placement
/// does not recompute power; call [`recompute_power`](Self::recompute_power)
/// once the layout is complete.
///
/// # Examples
///
/// ```
/// use lightwire_core::{Board, Position, Side};
///
/// let mut board = Board::new(2, 2)?;
/// board.place_source(Position::new(1, 1), &[Side::East, Side::South])?;
/// board.place_wire(Position::new(1, 2), &[Side::West, Side::South])?;
/// board.place_wire(Position::new(2, 1), &[Side::North, Side::East])?;
/// board.place_bulb(Position::new(2, 2), Side::North)?;
/// board.recompute_power();
/// assert!(board.is_won());
///
/// board.rotate_clockwise(Position::new(2, 2));
/// assert!(!board.is_won());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Board {
    rows: u16,
    cols: u16,
    nodes: Vec<Node>,
    source: Option<Position>,
    source_placed: bool,
    win_state: WinState,
    notifier: ChangeNotifier,
}

impl Board {
    /// Creates a board of `rows` × `cols` empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        let nodes = (1..=rows)
            .flat_map(|row| (1..=cols).map(move |col| Node::empty(Position::new(row, col))))
            .collect();
        log::debug!("created {rows}x{cols} board");
        Ok(Self {
            rows,
            cols,
            nodes,
            source: None,
            source_placed: false,
            // an all-empty board is vacuously solved
            win_state: WinState::Solved,
            notifier: ChangeNotifier::default(),
        })
    }

    /// Rebuilds a board from tile definitions and computes its power state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] for a zero dimension and
    /// [`BoardError::InvalidTile`] for the first definition that cannot be
    /// placed.
    pub fn from_tile_defs<'a, I>(rows: u16, cols: u16, defs: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = &'a TileDef>,
    {
        let mut board = Self::new(rows, cols)?;
        for (index, def) in defs.into_iter().enumerate() {
            board
                .place(def.kind, def.position, SideSet::from_sides(def.sides.iter().copied()))
                .map_err(|source| BoardError::InvalidTile { index, source })?;
        }
        board.recompute_power();
        Ok(board)
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Returns the number of cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; boards have at least one cell.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `pos` lies on this board.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        (1..=self.rows).contains(&pos.row()) && (1..=self.cols).contains(&pos.col())
    }

    pub(crate) fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| {
            usize::from(pos.row() - 1) * usize::from(self.cols) + usize::from(pos.col() - 1)
        })
    }

    /// Returns the node at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn node_at(&self, pos: Position) -> Option<&Node> {
        self.index_of(pos).map(|index| &self.nodes[index])
    }

    /// Iterates all nodes in row-major order.
    #[must_use]
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns the positions of every non-empty node in row-major order.
    #[must_use]
    pub fn filled_positions(&self) -> Vec<Position> {
        self.nodes
            .iter()
            .filter(|node| !node.kind().is_empty())
            .map(Node::position)
            .collect()
    }

    /// Returns where the source currently sits, if one is on the board.
    #[must_use]
    pub fn source_position(&self) -> Option<Position> {
        self.source
    }

    /// Returns `true` once a source has ever been placed, even if it was later
    /// overwritten.
    #[must_use]
    pub fn has_placed_source(&self) -> bool {
        self.source_placed
    }

    /// Places a node of `kind` at `pos`, replacing whatever was there.
    ///
    /// This is the single validation point for placement invariants: the
    /// position must be on the board, a source may only be placed once per
    /// board, wires need two or more distinct sides, sources one or more, and
    /// bulbs exactly one.
    ///
    /// # Errors
    ///
    /// Returns the matching [`PlacementError`]; the board is left unchanged.
    pub fn place(
        &mut self,
        kind: TileKind,
        pos: Position,
        sides: SideSet,
    ) -> Result<&Node, PlacementError> {
        let index = self
            .index_of(pos)
            .ok_or(PlacementError::OutOfBounds { position: pos })?;
        let node_kind = NodeKind::from(kind);
        if node_kind.is_source() && self.source_placed {
            return Err(PlacementError::DuplicateSource);
        }
        if !node_kind.accepts_arity(sides.len()) {
            return Err(PlacementError::InvalidArity {
                kind: node_kind,
                arity: sides.len(),
            });
        }

        if self.source == Some(pos) {
            log::debug!("source at {pos} overwritten");
            self.source = None;
        }
        if node_kind.is_source() {
            log::debug!("source placed at {pos}");
            self.source = Some(pos);
            self.source_placed = true;
        }
        self.nodes[index] = Node::new(pos, node_kind, sides);
        self.notifier.notify_node(&self.nodes[index]);
        Ok(&self.nodes[index])
    }

    /// Places a wire with the given sides.
    ///
    /// # Errors
    ///
    /// See [`place`](Self::place).
    pub fn place_wire(&mut self, pos: Position, sides: &[Side]) -> Result<&Node, PlacementError> {
        self.place(TileKind::Wire, pos, SideSet::from_sides(sides.iter().copied()))
    }

    /// Places a bulb facing `side`.
    ///
    /// # Errors
    ///
    /// See [`place`](Self::place).
    pub fn place_bulb(&mut self, pos: Position, side: Side) -> Result<&Node, PlacementError> {
        self.place(TileKind::Bulb, pos, SideSet::from(side))
    }

    /// Places the power source with the given sides.
    ///
    /// # Errors
    ///
    /// See [`place`](Self::place).
    pub fn place_source(
        &mut self,
        pos: Position,
        sides: &[Side],
    ) -> Result<&Node, PlacementError> {
        self.place(TileKind::Source, pos, SideSet::from_sides(sides.iter().copied()))
    }

    /// Renders every non-empty node as a [`TileDef`], row-major, with sides in
    /// canonical order.
    #[must_use]
    pub fn tile_defs(&self) -> Vec<TileDef> {
        self.nodes
            .iter()
            .filter_map(|node| {
                let kind = match node.kind() {
                    NodeKind::Empty => return None,
                    NodeKind::Wire => TileKind::Wire,
                    NodeKind::Bulb => TileKind::Bulb,
                    NodeKind::Source => TileKind::Source,
                };
                Some(TileDef::new(kind, node.position(), node.sides().sides()))
            })
            .collect()
    }

    /// Rotates the node at `pos` a quarter turn clockwise, then recomputes power.
    ///
    /// Returns `false` without doing anything if `pos` is out of bounds or
    /// empty.
    pub fn rotate_clockwise(&mut self, pos: Position) -> bool {
        self.rotate_with(pos, Node::rotate_clockwise)
    }

    /// Rotates the node at `pos` a quarter turn counter-clockwise, then
    /// recomputes power.
    ///
    /// Returns `false` without doing anything if `pos` is out of bounds or
    /// empty.
    pub fn rotate_counter_clockwise(&mut self, pos: Position) -> bool {
        self.rotate_with(pos, Node::rotate_counter_clockwise)
    }

    fn rotate_with(&mut self, pos: Position, rotate: fn(&mut Node)) -> bool {
        let Some(index) = self.index_of(pos) else {
            return false;
        };
        let node = &mut self.nodes[index];
        if node.kind().is_empty() {
            return false;
        }
        rotate(node);
        self.notifier.notify_node(&self.nodes[index]);
        self.recompute_power();
        true
    }

    /// Recomputes which nodes are powered and updates the win state.
    ///
    /// The new powered set is computed from scratch by flood fill from the
    /// source and committed in one step. Node listeners fire for every node
    /// whose flag changed; win listeners fire only if the win state flipped.
    /// Calling this twice without an intervening mutation changes nothing.
    pub fn recompute_power(&mut self) {
        let powered = match self.source {
            Some(source) => power::flood_fill(self, source),
            None => vec![false; self.nodes.len()],
        };

        let mut changed = 0usize;
        for (node, powered) in self.nodes.iter_mut().zip(powered) {
            if node.is_powered() != powered {
                node.set_powered(powered);
                self.notifier.notify_node(node);
                changed += 1;
            }
        }
        log::trace!("power recomputed, {changed} node(s) changed");

        let win_state = WinState::from(self.is_won());
        if win_state != self.win_state {
            log::debug!("win state changed to {win_state:?}");
            self.win_state = win_state;
            self.notifier.notify_win(win_state);
        }
    }

    /// Returns `true` if every non-empty node is powered.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.nodes
            .iter()
            .filter(|node| !node.kind().is_empty())
            .all(Node::is_powered)
    }

    /// Returns the win state as of the last power recomputation.
    #[must_use]
    pub fn win_state(&self) -> WinState {
        self.win_state
    }

    /// Returns `true` if at least one bulb is powered.
    #[must_use]
    pub fn any_bulb_powered(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| node.kind().is_bulb() && node.is_powered())
    }

    /// Registers a listener for changes to the cell at `pos`.
    ///
    /// The subscription follows the cell, so it survives the node there being
    /// replaced. Returns `None` if `pos` is out of bounds.
    pub fn subscribe<F>(&mut self, pos: Position, listener: F) -> Option<ListenerId>
    where
        F: FnMut(&Node) + Send + 'static,
    {
        if !self.contains(pos) {
            return None;
        }
        let listener: NodeListener = Box::new(listener);
        Some(self.notifier.subscribe_node(pos, listener))
    }

    /// Registers a listener for win-state transitions.
    pub fn subscribe_win<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(WinState) + Send + 'static,
    {
        let listener: WinListener = Box::new(listener);
        self.notifier.subscribe_win(listener)
    }

    /// Removes a node or win listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
