//! Power propagation by flood fill from the source.

use std::collections::VecDeque;

use crate::{Board, Position};

/// Computes which cells are energized, indexed like the board's node storage.
///
/// Starting at `source`, a neighbor becomes powered when it is in bounds,
/// non-empty, not yet powered, and has a connector facing back toward the
/// current node. Sides are visited in `N, E, S, W` order and each cell is
/// queued at most once, so the traversal is deterministic and linear in the
/// board size.
pub(crate) fn flood_fill(board: &Board, source: Position) -> Vec<bool> {
    let mut powered = vec![false; board.len()];
    let Some(root) = board.index_of(source) else {
        return powered;
    };
    powered[root] = true;

    let mut queue = VecDeque::from([source]);
    while let Some(pos) = queue.pop_front() {
        let Some(node) = board.node_at(pos) else {
            continue;
        };
        for side in node.sides().sides() {
            let Some(next) = pos.neighbor(side) else {
                continue;
            };
            let (Some(index), Some(neighbor)) = (board.index_of(next), board.node_at(next)) else {
                continue;
            };
            if neighbor.kind().is_empty() || powered[index] {
                continue;
            }
            if neighbor.connects(side.opposite()) {
                powered[index] = true;
                queue.push_back(next);
            }
        }
    }
    powered
}
