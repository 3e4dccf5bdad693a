//! Replay protection for settled claims.

use crate::{
    error::SettlementError,
    types::{ClaimElement, LeafHash},
};
use alloy::primitives::map::HashSet;
use tracing::debug;

/// The set of consumed leaves.
///
/// A leaf enters the ledger once, at its first successful settlement, and is never removed
/// afterwards except to undo an aborted settlement.
#[derive(Debug, Clone, Default)]
pub struct ClaimLedger {
    consumed: HashSet<LeafHash>,
}

impl ClaimLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `leaf` has been consumed.
    pub fn is_consumed(&self, leaf: &LeafHash) -> bool {
        self.consumed.contains(leaf)
    }

    /// Consumes the leaf of `element`, returning its hash.
    ///
    /// Fails with [`SettlementError::AlreadyClaimed`] carrying the claim fields if the leaf was
    /// consumed before.
    pub fn mark_consumed(&mut self, element: &ClaimElement) -> Result<LeafHash, SettlementError> {
        let leaf = element.leaf_hash();
        if !self.consumed.insert(leaf) {
            return Err(SettlementError::AlreadyClaimed(element.details()));
        }

        debug!(%leaf, claimer = %element.claimer, "Leaf consumed");
        Ok(leaf)
    }

    /// Undoes [`Self::mark_consumed`] for a settlement that did not complete.
    pub(crate) fn release(&mut self, leaf: &LeafHash) {
        if self.consumed.remove(leaf) {
            debug!(%leaf, "Leaf released");
        }
    }

    /// Number of consumed leaves.
    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    /// Whether no leaf has been consumed.
    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}
