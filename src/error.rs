//! Errors returned by [`Tree`][crate::Tree] operations.

use thiserror::Error;

use crate::threaded::State;

/// Everything that can go wrong in a tree operation. A failed operation
/// leaves the tree exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value being inserted is already in the tree.
    #[error("value already exists")]
    DuplicateValue,

    /// The value being deleted is not in the tree.
    #[error("value does not exist")]
    NotFound,

    /// The operation isn't allowed in the tree's current lifecycle state.
    #[error("tree is {actual} but the operation requires it to be {required}")]
    InvalidState {
        /// The state the operation needs.
        required: State,
        /// The state the tree is in.
        actual: State,
    },

    /// Deleting the last node of a tree isn't supported.
    #[error("cannot delete the only remaining node")]
    InvalidOperation,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
