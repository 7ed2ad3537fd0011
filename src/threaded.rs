//! A right-threaded Binary Search Tree.
//!
//! A [`Tree`] is built by inserting values while it is
//! [`Unthreaded`][State::Unthreaded]. Calling
//! [`make_right_threaded`][Tree::make_right_threaded] replaces every missing
//! right child with a thread to the node's in-order successor. From then on
//! the tree only supports deletion and reads, and every deletion repairs the
//! threads it disturbs.
//!
//! # Examples
//!
//! ```
//! use threaded_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value).unwrap();
//! }
//!
//! assert_eq!(tree.in_order().unwrap(), vec![1, 3, 4, 5, 7, 8, 9]);
//!
//! tree.make_right_threaded().unwrap();
//! assert_eq!(tree.threads_to_string().unwrap(), "7 -> 8\n4 -> 5\n1 -> 3\n");
//!
//! // No more growing once the tree is threaded.
//! assert!(matches!(tree.insert(2), Err(Error::InvalidState { .. })));
//!
//! tree.delete(&5).unwrap();
//! assert_eq!(tree.iter().unwrap().copied().collect::<Vec<_>>(), vec![1, 3, 4, 7, 8, 9]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter;

use generational_arena::Arena;
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::node::{Node, NodeId, Right};

/// The lifecycle of a [`Tree`]. The only transition is
/// `Unthreaded -> Threaded` and it happens once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Values can be inserted and traversed.
    Unthreaded,
    /// Threads are in place. Values can be deleted but not inserted.
    Threaded,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unthreaded => f.write_str("unthreaded"),
            Self::Threaded => f.write_str("threaded"),
        }
    }
}

/// Handed to a traversal's visitor once per node, in traversal order.
///
/// The visited node is marked while the visitor runs so a
/// [`dump`][Tree::dump] of [`tree`][Visit::tree] highlights it.
pub struct Visit<'a, T> {
    value: &'a T,
    is_last: bool,
    tree: &'a Tree<T>,
}

impl<'a, T> Visit<'a, T> {
    /// The value of the visited node.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Whether this is the final visit of the traversal.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// The tree being traversed.
    pub fn tree(&self) -> &'a Tree<T> {
        self.tree
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Order {
    Pre,
    In,
    Post,
}

/// Where a node hangs from.
#[derive(Copy, Clone, Debug)]
enum Slot {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// A right-threaded Binary Search Tree of unique values.
pub struct Tree<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) root: Option<NodeId>,
    state: State,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty, unthreaded `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            state: State::Unthreaded,
        }
    }

    /// The lifecycle state of the tree.
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether [`make_right_threaded`][Self::make_right_threaded] has been called.
    pub fn is_threaded(&self) -> bool {
        self.state == State::Threaded
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.map(|root| &self.nodes[root])
    }

    /// Inserts `value` into the tree.
    ///
    /// Fails with [`Error::DuplicateValue`] if the value is already present
    /// and with [`Error::InvalidState`] once the tree is threaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateValue));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, value: T) -> Result<()>
    where
        T: Ord,
    {
        self.require(State::Unthreaded)?;

        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::new(value)));
            return Ok(());
        };

        loop {
            let (ordering, left, right) = {
                let node = &self.nodes[current];
                (value.cmp(&node.value), node.left, node.right.child())
            };

            match ordering {
                Ordering::Less => match left {
                    Some(left) => current = left,
                    None => {
                        let id = self.nodes.insert(Node::new(value));
                        self.nodes[current].left = Some(id);
                        return Ok(());
                    }
                },
                Ordering::Equal => return Err(Error::DuplicateValue),
                Ordering::Greater => match right {
                    Some(right) => current = right,
                    None => {
                        let id = self.nodes.insert(Node::new(value));
                        self.nodes[current].right = Right::Child(id);
                        return Ok(());
                    }
                },
            }
        }
    }

    /// Whether `value` is in the tree. Works in either state and never
    /// follows a thread.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// The values in pre-order (node, left, right).
    pub fn pre_order(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.traverse(Order::Pre, |_| {})
    }

    /// Like [`pre_order`][Self::pre_order] but calls `visitor` on each node
    /// as it is visited.
    pub fn pre_order_with<F>(&self, visitor: F) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(Visit<'_, T>),
    {
        self.traverse(Order::Pre, visitor)
    }

    /// The values in in-order (left, node, right), which is ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// assert_eq!(tree.in_order().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.traverse(Order::In, |_| {})
    }

    /// Like [`in_order`][Self::in_order] but calls `visitor` on each node
    /// as it is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.in_order_with(|visit| seen.push((*visit.value(), visit.is_last())))
    ///     .unwrap();
    ///
    /// assert_eq!(seen, vec![(1, false), (2, false), (3, true)]);
    /// ```
    pub fn in_order_with<F>(&self, visitor: F) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(Visit<'_, T>),
    {
        self.traverse(Order::In, visitor)
    }

    /// The values in post-order (left, right, node).
    pub fn post_order(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.traverse(Order::Post, |_| {})
    }

    /// Like [`post_order`][Self::post_order] but calls `visitor` on each node
    /// as it is visited.
    pub fn post_order_with<F>(&self, visitor: F) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(Visit<'_, T>),
    {
        self.traverse(Order::Post, visitor)
    }

    /// Points every node without a right child at its in-order successor
    /// and moves the tree to [`State::Threaded`]. The maximum node keeps no
    /// right link at all.
    pub fn make_right_threaded(&mut self) -> Result<()> {
        self.require(State::Unthreaded)?;

        let mut order = Vec::with_capacity(self.len());
        self.collect(self.root, Order::In, &mut order);

        // Each node's successor is simply the next one in `order`.
        let successors = order.iter().skip(1).copied().map(Some).chain(iter::once(None));
        for (&id, successor) in order.iter().zip(successors) {
            let node = &mut self.nodes[id];
            if node.has_right_child() {
                continue;
            }

            trace!("threading {id:?} to {successor:?}");
            node.right = successor.map_or(Right::None, Right::Thread);
        }

        self.state = State::Threaded;
        debug!("threaded a tree of {} nodes", order.len());
        Ok(())
    }

    /// Every thread as a `(value, successor)` pair. Nodes are reported
    /// right subtree first, then the node's own thread, then the left subtree.
    pub fn threads(&self) -> Result<Vec<(&T, &T)>> {
        self.require(State::Threaded)?;

        let mut threads = Vec::new();
        self.collect_threads(self.root, &mut threads);
        Ok(threads)
    }

    /// The [`threads`][Self::threads] rendered one per line as
    /// `"<value> -> <successor>"`.
    pub fn threads_to_string(&self) -> Result<String>
    where
        T: fmt::Display,
    {
        Ok(self
            .threads()?
            .into_iter()
            .map(|(value, successor)| format!("{value} -> {successor}\n"))
            .collect())
    }

    /// Iterates the values in ascending order by following threads instead
    /// of keeping a stack.
    pub fn iter(&self) -> Result<Iter<'_, T>> {
        self.require(State::Threaded)?;

        Ok(Iter {
            tree: self,
            next: self.root.map(|root| self.leftmost(root)),
        })
    }

    /// Deletes `value` from a threaded tree, repairing any thread that
    /// pointed at or through the removed node.
    ///
    /// Fails with [`Error::InvalidState`] before threading,
    /// [`Error::NotFound`] if the value is absent and
    /// [`Error::InvalidOperation`] when `value` is the only node left.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.make_right_threaded().unwrap();
    ///
    /// assert_eq!(tree.delete(&3), Err(Error::NotFound));
    /// assert_eq!(tree.delete(&2), Ok(()));
    /// assert_eq!(tree.delete(&1), Err(Error::InvalidOperation));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<()>
    where
        T: Ord,
    {
        self.require(State::Threaded)?;

        let (slot, id) = self.search(value).ok_or(Error::NotFound)?;
        let node = &self.nodes[id];

        if matches!(slot, Slot::Root) && node.left.is_none() && node.right == Right::None {
            return Err(Error::InvalidOperation);
        }

        match (node.left, node.right) {
            (None, Right::None | Right::Thread(_)) => {
                debug!("deleting {id:?} with no children");
                self.delete_leaf(slot, id);
            }
            (Some(_), Right::Child(_)) => {
                debug!("deleting {id:?} with two children");
                self.delete_with_two_children(id);
            }
            (Some(_), Right::None | Right::Thread(_)) | (None, Right::Child(_)) => {
                debug!("deleting {id:?} with one child");
                self.delete_with_one_child(slot, id);
            }
        }

        Ok(())
    }

    fn require(&self, required: State) -> Result<()> {
        if self.state == required {
            Ok(())
        } else {
            Err(Error::InvalidState {
                required,
                actual: self.state,
            })
        }
    }

    fn traverse<F>(&self, order: Order, mut visitor: F) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(Visit<'_, T>),
    {
        self.require(State::Unthreaded)?;

        let mut ids = Vec::with_capacity(self.len());
        self.collect(self.root, order, &mut ids);

        let mut values = Vec::with_capacity(ids.len());
        for (i, &id) in ids.iter().enumerate() {
            let node = &self.nodes[id];
            node.mark();
            values.push(node.value.clone());
            visitor(Visit {
                value: &node.value,
                is_last: i + 1 == ids.len(),
                tree: self,
            });
        }

        for (_, node) in self.nodes.iter() {
            node.unmark();
        }

        Ok(values)
    }

    /// Pushes the ids under `id` onto `out` in the given order. Only real
    /// children are followed.
    fn collect(&self, id: Option<NodeId>, order: Order, out: &mut Vec<NodeId>) {
        let Some(id) = id else {
            return;
        };
        let node = &self.nodes[id];

        if order == Order::Pre {
            out.push(id);
        }
        self.collect(node.left, order, out);
        if order == Order::In {
            out.push(id);
        }
        self.collect(node.right.child(), order, out);
        if order == Order::Post {
            out.push(id);
        }
    }

    fn collect_threads<'a>(&'a self, id: Option<NodeId>, out: &mut Vec<(&'a T, &'a T)>) {
        let Some(id) = id else {
            return;
        };
        let node = &self.nodes[id];

        match node.right {
            Right::Child(right) => self.collect_threads(Some(right), out),
            Right::Thread(successor) => out.push((&node.value, &self.nodes[successor].value)),
            Right::None => {}
        }
        self.collect_threads(node.left, out);
    }

    /// Finds the node holding `value` and the slot it hangs from. The walk
    /// stops at threads, so it behaves the same before and after threading.
    fn search(&self, value: &T) -> Option<(Slot, NodeId)>
    where
        T: Ord,
    {
        let mut slot = Slot::Root;
        let mut current = self.root?;

        loop {
            let node = &self.nodes[current];
            let (next_slot, next) = match value.cmp(&node.value) {
                Ordering::Equal => return Some((slot, current)),
                Ordering::Less => (Slot::Left(current), node.left),
                Ordering::Greater => (Slot::Right(current), node.right.child()),
            };

            slot = next_slot;
            current = next?;
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// The in-order predecessor within `id`'s left subtree: one step left,
    /// then right for as long as there is a real right child.
    fn predecessor(&self, id: NodeId) -> Option<(Slot, NodeId)> {
        let mut slot = Slot::Left(id);
        let mut current = self.nodes[id].left?;

        while let Some(right) = self.nodes[current].right.child() {
            slot = Slot::Right(current);
            current = right;
        }

        Some((slot, current))
    }

    fn replace(&mut self, slot: Slot, id: Option<NodeId>) {
        match slot {
            Slot::Root => self.root = id,
            Slot::Left(parent) => self.nodes[parent].left = id,
            Slot::Right(parent) => {
                self.nodes[parent].right = id.map_or(Right::None, Right::Child);
            }
        }
    }

    fn take(&mut self, id: NodeId) -> Node<T> {
        self.nodes
            .remove(id)
            .expect("ids reachable from the root are always in the arena")
    }

    /// Removes a node with no left child and no real right child.
    fn delete_leaf(&mut self, slot: Slot, id: NodeId) -> Node<T> {
        let removed = self.take(id);

        match slot {
            Slot::Root => self.root = None,
            Slot::Left(parent) => self.nodes[parent].left = None,
            // The parent was the predecessor so it inherits the thread (or
            // becomes the maximum).
            Slot::Right(parent) => self.nodes[parent].right = removed.right,
        }

        removed
    }

    /// Removes a node with exactly one real child, or a left child and a
    /// thread.
    fn delete_with_one_child(&mut self, slot: Slot, id: NodeId) -> Node<T> {
        // Only a node with a left subtree has a thread pointing at it.
        if let Some((_, predecessor)) = self.predecessor(id) {
            let right = self.nodes[id].right;
            debug_assert_eq!(self.nodes[predecessor].right, Right::Thread(id));

            self.nodes[predecessor].right = match right {
                Right::Thread(successor) if successor == id => Right::None,
                right => right,
            };
        }

        let removed = self.take(id);
        let child = removed.left.or_else(|| removed.right.child());
        self.replace(slot, child);

        removed
    }

    /// Moves the predecessor's value into `id` and removes the predecessor
    /// node instead, which can't have a real right child.
    fn delete_with_two_children(&mut self, id: NodeId) {
        let Some((slot, predecessor)) = self.predecessor(id) else {
            unreachable!("a node with two children has a left subtree");
        };

        let removed = if self.nodes[predecessor].is_leaf() {
            self.delete_leaf(slot, predecessor)
        } else {
            self.delete_with_one_child(slot, predecessor)
        };

        self.nodes[id].value = removed.value;
    }
}

/// In-order iterator over a threaded [`Tree`]. See [`Tree::iter`].
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let id = self.next?;
        let node = &tree.nodes[id];

        self.next = match node.right {
            Right::Child(right) => Some(tree.leftmost(right)),
            Right::Thread(successor) => Some(successor),
            Right::None => None,
        };

        Some(&node.value)
    }
}

#[cfg(test)]
impl<T> Tree<T>
where
    T: Ord + fmt::Debug,
{
    /// Checks the order invariant over real edges, that every arena entry is
    /// reachable, and that threads point at in-order successors.
    pub(crate) fn assert_invariants(&self) {
        let mut order = Vec::new();
        self.collect(self.root, Order::In, &mut order);

        assert_eq!(order.len(), self.nodes.len(), "unreachable nodes in arena");

        for pair in order.windows(2) {
            let (a, b) = (&self.nodes[pair[0]].value, &self.nodes[pair[1]].value);
            assert!(a < b, "{a:?} is not less than {b:?}");
        }

        for (i, &id) in order.iter().enumerate() {
            let node = &self.nodes[id];
            let successor = order.get(i + 1).copied();

            match (self.state, node.right) {
                (_, Right::Child(_)) => {}
                (State::Unthreaded, Right::Thread(_)) => {
                    panic!("{:?} has a thread before threading", node.value)
                }
                (State::Unthreaded, Right::None) => {}
                (State::Threaded, Right::Thread(target)) => {
                    assert_eq!(Some(target), successor, "bad thread on {:?}", node.value)
                }
                (State::Threaded, Right::None) => {
                    assert_eq!(successor, None, "{:?} is missing a thread", node.value)
                }
            }
        }
    }
}
