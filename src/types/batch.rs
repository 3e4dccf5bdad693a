//! Claim batches as handed to the off-chain tree generator.

use super::{ClaimElement, MerkleError, MerkleProof, MerkleTree, ProofSchemeKind};
use alloy::primitives::{Address, B256, U256};
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of a [`ClaimBatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    /// The claimer.
    pub claimer: Address,
    /// Reward item ids.
    #[serde(alias = "tokenIds")]
    pub item_ids: Vec<U256>,
    /// Reward amounts.
    pub amounts: Vec<U256>,
    /// Fee owed.
    #[serde(alias = "costs")]
    pub cost: U256,
}

impl From<ClaimElement> for BatchEntry {
    fn from(element: ClaimElement) -> Self {
        Self {
            claimer: element.claimer,
            item_ids: element.item_ids,
            amounts: element.amounts,
            cost: element.cost,
        }
    }
}

/// A set of claims sharing one epoch salt, committed to by one root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimBatch {
    /// The epoch salt of every leaf.
    #[serde(alias = "epochId")]
    pub epoch_salt: U256,
    /// The claims.
    pub elements: Vec<BatchEntry>,
}

impl ClaimBatch {
    /// Loads a batch from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read batch file: {}", path.display()))?;
        let batch = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse batch file: {}", path.display()))?;
        Ok(batch)
    }

    /// Returns the claim element of entry `index`.
    pub fn element(&self, index: usize) -> Option<ClaimElement> {
        self.elements.get(index).map(|entry| {
            ClaimElement::new(
                entry.claimer,
                entry.item_ids.clone(),
                entry.amounts.clone(),
                entry.cost,
                self.epoch_salt,
            )
        })
    }

    /// Returns every claim element in order.
    pub fn claim_elements(&self) -> Vec<ClaimElement> {
        (0..self.elements.len()).filter_map(|i| self.element(i)).collect()
    }

    /// Returns the leaf hashes in order.
    pub fn leaves(&self) -> Vec<B256> {
        self.claim_elements().iter().map(ClaimElement::leaf_hash).collect()
    }

    /// Builds the Merkle tree over the leaves.
    pub fn tree(&self, scheme: ProofSchemeKind) -> Result<MerkleTree, MerkleError> {
        MerkleTree::with_scheme(self.leaves(), scheme)
    }

    /// Returns the root and the proof of entry `index`.
    pub fn proof(
        &self,
        index: usize,
        scheme: ProofSchemeKind,
    ) -> Result<(B256, MerkleProof), MerkleError> {
        let mut tree = self.tree(scheme)?;
        let proof = tree.proof(index)?;
        Ok((tree.root(), proof))
    }
}
