use super::RevertData;
use crate::types::IPayoutClaim;
use alloy::{primitives::B256, sol_types::SolError};
use thiserror::Error;

/// Errors related to the Merkle root lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The root is already active.
    #[error("merkle root {0} already exists")]
    MerkleRootAlreadyExists(B256),
    /// The root is not active.
    #[error("merkle root {0} does not exist")]
    MerkleRootDoesNotExist(B256),
}

impl RevertData for RegistryError {
    fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::MerkleRootAlreadyExists(root) => {
                IPayoutClaim::MerkleRootAlreadyExists { root: *root }.abi_encode()
            }
            Self::MerkleRootDoesNotExist(root) => {
                IPayoutClaim::MerkleRootDoesNotExist { root: *root }.abi_encode()
            }
        }
    }
}
