//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::Side;

/// Domain errors represent violations of the tree's structural rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("tree is empty")]
    EmptyTree,

    #[error("node not found in tree")]
    NodeNotFound,

    #[error("{side} child slot already occupied")]
    SlotOccupied { side: Side },

    #[error("token source failed: {message}")]
    TokenSource { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
