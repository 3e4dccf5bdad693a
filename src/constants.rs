//! Claim engine constants.

use crate::types::IERC20Receiver;
use alloy::{primitives::FixedBytes, sol_types::SolCall};

/// Magic value returned by a receiver that accepted a fee token transfer.
///
/// This is the selector of `onERC20Received(address,address,uint256,bytes)`.
pub const ERC20_RECEIVED: FixedBytes<4> =
    FixedBytes(IERC20Receiver::onERC20ReceivedCall::SELECTOR);
