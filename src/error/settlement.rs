use super::RevertData;
use crate::types::{ClaimDetails, IPayoutClaim};
use alloy::{
    primitives::{Address, B256, U256},
    sol_types::SolError,
};
use thiserror::Error;

/// Errors raised while validating and settling a claim.
#[derive(Debug, Error)]
pub enum SettlementError {
    /// The tokens were not received from the configured fee contract.
    #[error("fee contract mismatch, expected {expected}, got {got}")]
    FeeContractMismatch {
        /// The contract that sent the notification.
        got: Address,
        /// The configured fee contract.
        expected: Address,
    },
    /// The transfer data is not a claim payload.
    #[error("invalid claim payload: {0}")]
    InvalidPayload(#[from] alloy::sol_types::Error),
    /// The ids and values arrays differ in length.
    #[error("inconsistent array lengths, {ids} ids and {amounts} amounts")]
    InconsistentArrayLengths {
        /// Number of item ids.
        ids: usize,
        /// Number of amounts.
        amounts: usize,
    },
    /// The root is not active.
    #[error("merkle root {0} does not exist")]
    MerkleRootDoesNotExist(B256),
    /// The payload states a different cost than was transferred.
    #[error("cost mismatch, expected {expected}, paid {paid}")]
    CostMismatch {
        /// Cost stated in the payload.
        expected: U256,
        /// Amount transferred.
        paid: U256,
    },
    /// The leaf has already been consumed.
    #[error("already claimed: {0}")]
    AlreadyClaimed(ClaimDetails),
    /// The proof does not lead to the root.
    #[error("invalid proof: {0}")]
    InvalidProof(ClaimDetails),
}

impl RevertData for SettlementError {
    fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::FeeContractMismatch { got, expected } => {
                IPayoutClaim::FeeContractMismatch { received: *got, expected: *expected }
                    .abi_encode()
            }
            Self::InvalidPayload(_) => IPayoutClaim::InvalidClaimPayload {}.abi_encode(),
            Self::InconsistentArrayLengths { .. } => {
                IPayoutClaim::InconsistentArrayLengths {}.abi_encode()
            }
            Self::MerkleRootDoesNotExist(root) => {
                IPayoutClaim::MerkleRootDoesNotExist { root: *root }.abi_encode()
            }
            Self::CostMismatch { expected, paid } => {
                IPayoutClaim::CostMismatch { expected: *expected, paid: *paid }.abi_encode()
            }
            Self::AlreadyClaimed(details) => IPayoutClaim::AlreadyClaimed {
                claimer: details.claimer,
                ids: details.item_ids.clone(),
                values: details.amounts.clone(),
                cost: details.cost,
                epochId: details.epoch_salt,
            }
            .abi_encode(),
            Self::InvalidProof(details) => IPayoutClaim::InvalidProof {
                claimer: details.claimer,
                ids: details.item_ids.clone(),
                values: details.amounts.clone(),
                cost: details.cost,
                epochId: details.epoch_salt,
            }
            .abi_encode(),
        }
    }
}

impl SettlementError {
    /// Claim fields attached to the error, if any.
    pub fn claim_details(&self) -> Option<&ClaimDetails> {
        match self {
            Self::AlreadyClaimed(details) | Self::InvalidProof(details) => Some(details),
            _ => None,
        }
    }
}
