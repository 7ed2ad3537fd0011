//! This crate exposes a right-threaded Binary Search Tree (BST), mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s. Each `Node` holds a value
//! and may have a left and a right child. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree
//! yields the values in sorted order. This is called an in-order traversal and
//! the value visited right after a `Node` is its in-order successor.
//!
//! ## Right threading
//!
//! Many `Node`s have no right child. A right-threaded BST reuses those empty
//! right links as "threads": non-owning references to the `Node`'s in-order
//! successor. Only the largest value is left without a right link. With
//! threads in place the tree can be walked in order without recursion or a
//! stack (see [`Tree::iter`]).
//!
//! Threads make structural changes delicate. Removing a `Node` may leave a
//! thread pointing at it, or may leave its parent without a right child and in
//! need of a thread of its own. [`Tree::delete`] repairs exactly the threads a
//! deletion disturbs.
//!
//! ## Lifecycle
//!
//! A [`Tree`] starts out [`Unthreaded`][State::Unthreaded]: values are
//! inserted and the tree can be traversed. [`Tree::make_right_threaded`] moves
//! it to [`Threaded`][State::Threaded] once and for all, after which values
//! can only be deleted or read.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod dump;
pub mod error;
pub mod node;
pub mod threaded;


pub use error::{Error, Result};
pub use threaded::{Iter, State, Tree, Visit};
