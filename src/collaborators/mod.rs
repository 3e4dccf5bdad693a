//! The token contracts the engine interacts with.
//!
//! The engine only needs two narrow capabilities from the outside world: a reward token it may
//! mint from, and a fee token that notifies it of incoming transfers. In-memory implementations
//! of both live in [`memory`] and are used by the test suite.

/// In-memory token implementations.
pub mod memory;
pub use memory::{InMemoryFeeToken, InMemoryRewardToken};

use crate::{
    error::{ClaimError, MintError},
    types::PaymentNotification,
};
use alloy::primitives::{Address, FixedBytes, U256};
use std::fmt::Debug;

/// Minting capability of the reward token.
pub trait RewardMinter: Send + Sync + Debug {
    /// Returns the reward token address.
    fn address(&self) -> Address;

    /// Mints `values[i]` of item `ids[i]` to `to`, invoked as `operator`.
    ///
    /// Either every item is minted or none is.
    fn mint_batch(
        &mut self,
        operator: Address,
        to: Address,
        ids: &[U256],
        values: &[U256],
    ) -> Result<(), MintError>;
}

/// A contract that accepts fee token transfers through the `onERC20Received` hook.
pub trait PaymentReceiver {
    /// Returns the receiver address credited by the transfer.
    fn address(&self) -> Address;

    /// Handles an inbound transfer. Returning an error reverts the transfer.
    fn on_erc20_received(
        &mut self,
        notification: PaymentNotification,
    ) -> Result<FixedBytes<4>, ClaimError>;
}
