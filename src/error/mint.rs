use super::RevertData;
use crate::types::{IERC1155Mintable, MINTER_ROLE};
use alloy::{
    primitives::{Address, U256},
    sol_types::{Revert, SolError},
};
use thiserror::Error;

/// Errors returned by the reward collaborator.
///
/// Revert data follows the reward token's own custom errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    /// The operator lacks the minter role.
    #[error("account {0} is missing the minter role")]
    MissingMinterRole(Address),
    /// The recipient is the zero address.
    #[error("cannot mint to the zero address")]
    MintToZeroAddress,
    /// The ids and values arrays differ in length.
    #[error("inconsistent array lengths, {ids} ids and {values} values")]
    InconsistentArrayLengths {
        /// Number of ids.
        ids: usize,
        /// Number of values.
        values: usize,
    },
    /// A recipient balance would overflow.
    #[error("balance overflow for {recipient}, id {id}, balance {balance}, value {value}")]
    BalanceOverflow {
        /// The recipient.
        recipient: Address,
        /// The token id.
        id: U256,
        /// The balance before the failing credit.
        balance: U256,
        /// The amount being credited.
        value: U256,
    },
    /// The collaborator rejected the mint for another reason.
    #[error("mint rejected: {0}")]
    Rejected(String),
}

impl RevertData for MintError {
    fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::MissingMinterRole(account) => {
                IERC1155Mintable::NotRoleHolder { role: MINTER_ROLE, account: *account }
                    .abi_encode()
            }
            Self::MintToZeroAddress => IERC1155Mintable::ERC1155MintToAddressZero {}.abi_encode(),
            Self::InconsistentArrayLengths { .. } => {
                IERC1155Mintable::InconsistentArrayLengths {}.abi_encode()
            }
            Self::BalanceOverflow { recipient, id, balance, value } => {
                IERC1155Mintable::ERC1155BalanceOverflow {
                    recipient: *recipient,
                    id: *id,
                    balance: *balance,
                    value: *value,
                }
                .abi_encode()
            }
            Self::Rejected(reason) => Revert { reason: reason.clone() }.abi_encode(),
        }
    }
}
