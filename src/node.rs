//! The unit of storage of a [`Tree`][crate::Tree].
//!
//! Nodes live in an arena owned by the tree and refer to each other through
//! [`NodeId`]s. A node's left link is always an owning edge. Its right link is
//! described by [`Right`], which says whether the handle it holds is an owned
//! child or a thread to the in-order successor.

use std::cell::Cell;

use generational_arena::Index;

/// A stable handle to a node stored in a tree's arena.
pub type NodeId = Index;

/// The right edge of a [`Node`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Right {
    /// No right child and no thread. In a threaded tree only the maximum node
    /// looks like this.
    None,
    /// An owned right child.
    Child(NodeId),
    /// A non-owning reference to the in-order successor.
    Thread(NodeId),
}

impl Right {
    /// The owned child, if this edge is one. Threads are not children.
    pub fn child(self) -> Option<NodeId> {
        match self {
            Self::Child(id) => Some(id),
            Self::None | Self::Thread(_) => None,
        }
    }

    /// The thread target, if this edge is a thread.
    pub fn thread(self) -> Option<NodeId> {
        match self {
            Self::Thread(id) => Some(id),
            Self::None | Self::Child(_) => None,
        }
    }
}

/// A value with its left and right links.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Right,
    /// Only used to highlight a node while it's being visited.
    marked: Cell<bool>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: Right::None,
            marked: Cell::new(false),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether the right link is a thread to the in-order successor.
    pub fn is_right_threaded(&self) -> bool {
        matches!(self.right, Right::Thread(_))
    }

    /// Whether the right link is an owned child.
    pub fn has_right_child(&self) -> bool {
        matches!(self.right, Right::Child(_))
    }

    /// Whether this node is currently highlighted by a traversal.
    pub fn is_marked(&self) -> bool {
        self.marked.get()
    }

    /// A node with no left child and no owned right child. It may still
    /// carry a thread.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && !self.has_right_child()
    }

    pub(crate) fn mark(&self) {
        self.marked.set(true);
    }

    pub(crate) fn unmark(&self) {
        self.marked.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generational_arena::Arena;

    #[test]
    fn new_node_is_a_leaf() {
        let node = Node::new(1);

        assert_eq!(node.value(), &1);
        assert!(node.is_leaf());
        assert!(!node.is_right_threaded());
        assert!(!node.is_marked());
    }

    #[test]
    fn thread_is_not_a_child() {
        let mut arena = Arena::new();
        let successor = arena.insert(Node::new(2));
        let mut node = Node::new(1);
        node.right = Right::Thread(successor);

        assert!(node.is_leaf());
        assert!(node.is_right_threaded());
        assert!(!node.has_right_child());
        assert_eq!(node.right.child(), None);
        assert_eq!(node.right.thread(), Some(successor));
    }

    #[test]
    fn marking() {
        let node = Node::new(1);

        node.mark();
        assert!(node.is_marked());

        node.unmark();
        assert!(!node.is_marked());
    }
}
