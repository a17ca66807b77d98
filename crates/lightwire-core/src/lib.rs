//! Core state engine for tile-rotation circuit puzzles.
//!
//! A rectangular [`Board`] holds one power source, wires, and bulbs. Each tile
//! exposes a subset of the four cardinal connectors; rotating a tile cycles its
//! connectors a quarter turn. The puzzle is solved when every non-empty tile is
//! energized through an unbroken chain of facing connectors from the source.
//!
//! # Overview
//!
//! 1. **Geometry** - cells and connectors
//!    - [`Position`]: 1-indexed `(row, col)` cell address
//!    - [`Side`] and [`SideSet`]: connector directions and sets of them
//!    - [`TileShape`]: orientation-independent classification of a connector set
//!
//! 2. **State** - what the board owns
//!    - [`Node`] and [`NodeKind`]: per-cell tile state
//!    - [`Board`]: the node arena, placement rules, rotation, flood-fill power
//!      propagation from the source, and win evaluation
//!
//! 3. **Boundary** - what external collaborators see
//!    - [`TileDef`]: plain-data tile definitions for loaders and persisters
//!    - [`WinState`] and [`ListenerId`]: synchronous change notifications
//!
//! # Examples
//!
//! ```
//! use lightwire_core::{Board, TileDef, WinState};
//!
//! let defs = ["P 1 1 EAST", "L 1 2 WEST EAST", "B 1 3 WEST"]
//!     .into_iter()
//!     .map(str::parse)
//!     .collect::<Result<Vec<TileDef>, _>>()?;
//! let mut board = Board::from_tile_defs(1, 3, &defs)?;
//! assert_eq!(board.win_state(), WinState::Solved);
//!
//! let wire = lightwire_core::Position::new(1, 2);
//! board.rotate_clockwise(wire);
//! assert_eq!(board.win_state(), WinState::Unsolved);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod board;
mod error;
mod node;
mod notifier;
mod position;
mod power;
mod shape;
mod side;
mod tile_def;

pub use self::{
    board::Board,
    error::{BoardError, PlacementError},
    node::{Node, NodeKind},
    notifier::{ListenerId, NodeListener, WinListener, WinState},
    position::Position,
    shape::TileShape,
    side::{ParseSideError, Side, SideSet},
    tile_def::{TileDef, TileDefParseError, TileKind},
};
