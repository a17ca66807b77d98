//! Synchronous change notification for boards.
//!
//! Two typed channels are kept apart: node listeners are registered per cell
//! and receive the node after every rotation, placement, or powered-flag
//! change; win listeners receive the new [`WinState`] only when it flips.

use std::{collections::HashMap, fmt};

use crate::{Node, Position};

/// Whether every non-empty tile is currently powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum WinState {
    /// At least one non-empty tile is unpowered.
    Unsolved,
    /// Every non-empty tile is powered.
    Solved,
}

impl From<bool> for WinState {
    fn from(won: bool) -> Self {
        if won { Self::Solved } else { Self::Unsolved }
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the node that changed.
pub type NodeListener = Box<dyn FnMut(&Node) + Send>;

/// Callback invoked with the new win state.
pub type WinListener = Box<dyn FnMut(WinState) + Send>;

#[derive(Default)]
pub(crate) struct ChangeNotifier {
    next_id: u64,
    node_listeners: HashMap<Position, Vec<(ListenerId, NodeListener)>>,
    win_listeners: Vec<(ListenerId, WinListener)>,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("next_id", &self.next_id)
            .field(
                "node_listeners",
                &self.node_listeners.values().map(Vec::len).sum::<usize>(),
            )
            .field("win_listeners", &self.win_listeners.len())
            .finish()
    }
}

impl ChangeNotifier {
    fn allocate_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn subscribe_node(&mut self, position: Position, listener: NodeListener) -> ListenerId {
        let id = self.allocate_id();
        self.node_listeners
            .entry(position)
            .or_default()
            .push((id, listener));
        id
    }

    pub(crate) fn subscribe_win(&mut self, listener: WinListener) -> ListenerId {
        let id = self.allocate_id();
        self.win_listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        if let Some(index) = self.win_listeners.iter().position(|(i, _)| *i == id) {
            self.win_listeners.remove(index);
            return true;
        }
        for listeners in self.node_listeners.values_mut() {
            if let Some(index) = listeners.iter().position(|(i, _)| *i == id) {
                listeners.remove(index);
                return true;
            }
        }
        false
    }

    pub(crate) fn notify_node(&mut self, node: &Node) {
        if let Some(listeners) = self.node_listeners.get_mut(&node.position()) {
            for (_, listener) in listeners {
                listener(node);
            }
        }
    }

    pub(crate) fn notify_win(&mut self, state: WinState) {
        for (_, listener) in &mut self.win_listeners {
            listener(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{NodeKind, SideSet};

    #[test]
    fn test_node_listener_filters_by_position() {
        let mut notifier = ChangeNotifier::default();
        let (tx, rx) = mpsc::channel();
        notifier.subscribe_node(
            Position::new(1, 2),
            Box::new(move |node| tx.send(node.position()).unwrap()),
        );

        let watched = Node::new(Position::new(1, 2), NodeKind::Bulb, SideSet::NORTH);
        let other = Node::new(Position::new(2, 1), NodeKind::Bulb, SideSet::NORTH);
        notifier.notify_node(&other);
        notifier.notify_node(&watched);

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), [Position::new(1, 2)]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut notifier = ChangeNotifier::default();
        let (tx, rx) = mpsc::channel();
        let id = notifier.subscribe_win(Box::new(move |state| tx.send(state).unwrap()));

        notifier.notify_win(WinState::Solved);
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify_win(WinState::Unsolved);

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), [WinState::Solved]);
    }

    #[test]
    fn test_ids_are_unique_across_channels() {
        let mut notifier = ChangeNotifier::default();
        let a = notifier.subscribe_win(Box::new(|_| {}));
        let b = notifier.subscribe_node(Position::new(1, 1), Box::new(|_| {}));
        assert_ne!(a, b);
        assert!(notifier.unsubscribe(b));
        assert!(notifier.unsubscribe(a));
    }
}
