use super::RevertData;
use crate::types::IPayoutClaim;
use alloy::{primitives::Address, sol_types::SolError};
use thiserror::Error;

/// Errors related to engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The fee contract address is the zero address.
    #[error("invalid fee contract address {0}")]
    InvalidFeeContractAddress(Address),
}

impl RevertData for ConfigError {
    fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::InvalidFeeContractAddress(fee_contract) => {
                IPayoutClaim::InvalidFeeContractAddress { feeContract: *fee_contract }.abi_encode()
            }
        }
    }
}
