use super::ClaimError;
use alloy::primitives::{Address, FixedBytes, U256};
use thiserror::Error;

/// Errors returned by a fee token transfer.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The sender does not hold enough tokens.
    #[error("insufficient balance for {account}, has {balance}, needs {needed}")]
    InsufficientBalance {
        /// The sender.
        account: Address,
        /// Current balance.
        balance: U256,
        /// Amount requested.
        needed: U256,
    },
    /// The receiver balance would overflow.
    #[error("balance overflow for {0}")]
    BalanceOverflow(Address),
    /// The receiver hook reverted.
    #[error("receiver rejected the transfer: {0}")]
    Rejected(#[from] ClaimError),
    /// The receiver hook returned something other than the accept selector.
    #[error("receiver returned unexpected selector {0}")]
    InvalidSelector(FixedBytes<4>),
}

impl TransferError {
    /// Returns the receiver error, if the hook reverted.
    pub fn as_rejection(&self) -> Option<&ClaimError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}
