//! Claim leaves.
//!
//! A leaf is `keccak256(abi.encodePacked(claimer, ids, values, cost, epochId))`, the exact layout
//! the off-chain generator hashes before building the tree. Packed arrays carry no length
//! prefix and every element occupies a full 32-byte word.

use alloy::primitives::{Address, B256, U256, keccak256};
use serde::{Deserialize, Serialize};

/// Size of a packed `address`.
const ADDRESS: usize = 20;

/// Size of a packed `uint256` word.
const WORD: usize = 32;

/// Identity of a single claim in the ledger.
pub type LeafHash = B256;

/// The fields of one claimable reward batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimElement {
    /// Account that pays the fee and receives the reward.
    pub claimer: Address,
    /// Reward item ids, paired by index with `amounts`.
    #[serde(alias = "ids")]
    pub item_ids: Vec<U256>,
    /// Reward quantities, paired by index with `item_ids`.
    #[serde(alias = "values")]
    pub amounts: Vec<U256>,
    /// Fee owed for the claim.
    pub cost: U256,
    /// Batch disambiguator so identical claims may coexist across roots.
    #[serde(default, alias = "epochId")]
    pub epoch_salt: U256,
}

impl ClaimElement {
    /// Creates a new claim element.
    pub fn new(
        claimer: Address,
        item_ids: Vec<U256>,
        amounts: Vec<U256>,
        cost: U256,
        epoch_salt: U256,
    ) -> Self {
        Self { claimer, item_ids, amounts, cost, epoch_salt }
    }

    /// Length of [`Self::encode`] output.
    pub fn encoded_len(&self) -> usize {
        ADDRESS + WORD * (self.item_ids.len() + self.amounts.len() + 2)
    }

    /// Packs the claim the way `abi.encodePacked(address, uint256[], uint256[], uint256,
    /// uint256)` does.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(self.claimer.as_slice());
        for id in &self.item_ids {
            out.extend_from_slice(&id.to_be_bytes::<WORD>());
        }
        for amount in &self.amounts {
            out.extend_from_slice(&amount.to_be_bytes::<WORD>());
        }
        out.extend_from_slice(&self.cost.to_be_bytes::<WORD>());
        out.extend_from_slice(&self.epoch_salt.to_be_bytes::<WORD>());
        out
    }

    /// The leaf hash of this claim.
    pub fn leaf_hash(&self) -> LeafHash {
        keccak256(self.encode())
    }

    /// Snapshot of the claim fields for error reporting.
    pub fn details(&self) -> ClaimDetails {
        ClaimDetails {
            claimer: self.claimer,
            item_ids: self.item_ids.clone(),
            amounts: self.amounts.clone(),
            cost: self.cost,
            epoch_salt: self.epoch_salt,
        }
    }
}

/// Claim fields attached to claim validation errors, so a client can tell which claim failed
/// without re-deriving the leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDetails {
    /// The claimer.
    pub claimer: Address,
    /// The reward item ids.
    pub item_ids: Vec<U256>,
    /// The reward amounts.
    pub amounts: Vec<U256>,
    /// The cost, i.e. the transferred fee.
    pub cost: U256,
    /// The epoch salt.
    pub epoch_salt: U256,
}

impl std::fmt::Display for ClaimDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "claimer {}, ids {:?}, amounts {:?}, cost {}, epoch {}",
            self.claimer, self.item_ids, self.amounts, self.cost, self.epoch_salt
        )
    }
}
