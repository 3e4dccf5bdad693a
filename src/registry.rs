//! Merkle root registry.
//!
//! Tracks which roots claims may currently be proven against. A root is either active or not;
//! deprecating a root does not prevent it from being published again later.

use crate::{
    error::RegistryError,
    types::{ClaimEvent, IPayoutClaim},
};
use alloy::primitives::{B256, map::HashSet};
use tracing::info;

/// The set of currently active Merkle roots.
#[derive(Debug, Clone, Default)]
pub struct RootRegistry {
    active: HashSet<B256>,
}

impl RootRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `root` active.
    pub fn publish(&mut self, root: B256) -> Result<ClaimEvent, RegistryError> {
        if !self.active.insert(root) {
            return Err(RegistryError::MerkleRootAlreadyExists(root));
        }

        info!(%root, "Merkle root added");
        Ok(IPayoutClaim::MerkleRootAdded { root }.into())
    }

    /// Marks `root` inactive.
    pub fn deprecate(&mut self, root: B256) -> Result<ClaimEvent, RegistryError> {
        if !self.active.remove(&root) {
            return Err(RegistryError::MerkleRootDoesNotExist(root));
        }

        info!(%root, "Merkle root deprecated");
        Ok(IPayoutClaim::MerkleRootDeprecated { root }.into())
    }

    /// Whether `root` is active.
    pub fn is_active(&self, root: &B256) -> bool {
        self.active.contains(root)
    }

    /// Number of active roots.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no root is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
