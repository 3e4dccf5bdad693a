//! Merkle tree error types.

use thiserror::Error;

/// Errors that can occur during Merkle tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// Cannot build a tree without leaves
    #[error("Cannot operate on empty tree")]
    EmptyTree,
    /// Leaf index out of bounds
    #[error("Leaf index {index} out of bounds (tree has {tree_size} leaves)")]
    IndexOutOfBounds {
        /// The index that was requested
        index: usize,
        /// The actual size of the tree
        tree_size: usize,
    },
    /// Exceeds maximum supported size
    #[error("Exceeds maximum supported size")]
    TooLarge,
    /// Tree size calculation overflow
    #[error("Tree size calculation overflow")]
    SizeCalculationOverflow,
}
