//! Notifications emitted by the claim engine.

use super::IPayoutClaim;
use alloy::{primitives::LogData, sol_types::SolEvent};

/// An event emitted by the claim engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimEvent {
    /// A root was published.
    MerkleRootAdded(IPayoutClaim::MerkleRootAdded),
    /// A root was deprecated.
    MerkleRootDeprecated(IPayoutClaim::MerkleRootDeprecated),
    /// The fee contract changed.
    FeeContractSet(IPayoutClaim::FeeContractSet),
    /// A claim was settled.
    PayoutClaimed(IPayoutClaim::PayoutClaimed),
}

impl ClaimEvent {
    /// Encodes the event as log topics and data.
    pub fn encode_log_data(&self) -> LogData {
        match self {
            Self::MerkleRootAdded(event) => event.encode_log_data(),
            Self::MerkleRootDeprecated(event) => event.encode_log_data(),
            Self::FeeContractSet(event) => event.encode_log_data(),
            Self::PayoutClaimed(event) => event.encode_log_data(),
        }
    }

    /// Returns the settled claim, if this is a [`ClaimEvent::PayoutClaimed`].
    pub fn as_payout(&self) -> Option<&IPayoutClaim::PayoutClaimed> {
        match self {
            Self::PayoutClaimed(event) => Some(event),
            _ => None,
        }
    }
}

impl From<IPayoutClaim::MerkleRootAdded> for ClaimEvent {
    fn from(event: IPayoutClaim::MerkleRootAdded) -> Self {
        Self::MerkleRootAdded(event)
    }
}

impl From<IPayoutClaim::MerkleRootDeprecated> for ClaimEvent {
    fn from(event: IPayoutClaim::MerkleRootDeprecated) -> Self {
        Self::MerkleRootDeprecated(event)
    }
}

impl From<IPayoutClaim::FeeContractSet> for ClaimEvent {
    fn from(event: IPayoutClaim::FeeContractSet) -> Self {
        Self::FeeContractSet(event)
    }
}

impl From<IPayoutClaim::PayoutClaimed> for ClaimEvent {
    fn from(event: IPayoutClaim::PayoutClaimed) -> Self {
        Self::PayoutClaimed(event)
    }
}
