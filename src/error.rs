//! Errors raised while building an allow-list tree

use crate::types::Leaf;

/// Failure of one of the tree building stages.
///
/// Every variant is terminal: the computation is pure, so the caller has to
/// fix the input and run it again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No identifier remained after deduplication.
    #[error("no identifiers to commit to")]
    EmptyInput,

    /// Layers were requested for an empty leaf sequence.
    #[error("empty tree")]
    EmptyTree,

    /// An identifier does not fit in a leaf.
    #[error("identifier needs {bytes} bytes, at most {max} are allowed")]
    PreconditionViolation {
        /// Minimal big-endian width of the offending identifier.
        bytes: usize,
        /// Leaf width.
        max: usize,
    },

    /// A proof was requested for a leaf outside of the tree.
    #[error("element {0} does not exist in the merkle tree")]
    NotFound(Leaf),

    /// Textual identifier could not be parsed.
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),
}

/// Result of the allow-list operations.
pub type Result<T> = core::result::Result<T, Error>;
