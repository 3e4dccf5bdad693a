use super::RevertData;
use crate::types::IPayoutClaim;
use alloy::{primitives::Address, sol_types::SolError};
use thiserror::Error;

/// Errors related to privileged operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The caller is not the contract owner.
    #[error("account {0} is not the contract owner")]
    NotContractOwner(Address),
}

impl RevertData for AuthError {
    fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::NotContractOwner(account) => {
                IPayoutClaim::NotContractOwner { account: *account }.abi_encode()
            }
        }
    }
}
