//! Test fixtures for claim trees
//!
//! This module provides utilities for loading and using Merkle tree test fixtures
//! generated with the off-chain claim tree generator (`merkletreejs`, sorted pairs).

use alloy::primitives::{B256, U256};
use claim_engine::types::{BatchEntry, ClaimBatch};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single test case from the claim fixtures
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTestCase {
    /// Name of the test case
    pub name: String,
    /// Epoch salt shared by every leaf
    pub epoch_salt: U256,
    /// The claims committed to by the tree
    pub elements: Vec<BatchEntry>,
    /// Leaf hashes
    pub leaves: Vec<B256>,
    /// Expected sorted-pair root
    pub root: B256,
    /// Expected positional root
    pub positional_root: B256,
    /// Proofs for each leaf
    pub proofs: Vec<ClaimProof>,
}

impl ClaimTestCase {
    /// Returns the test case as a claim batch.
    pub fn batch(&self) -> ClaimBatch {
        ClaimBatch { epoch_salt: self.epoch_salt, elements: self.elements.clone() }
    }
}

/// Proofs for a specific leaf
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimProof {
    /// Index of the leaf this proof is for
    pub index: usize,
    /// The leaf value
    pub leaf: B256,
    /// Sorted-pair siblings from leaf to root
    pub proof: Vec<B256>,
    /// Positional siblings from leaf to root
    pub positional_proof: Vec<B256>,
    /// Positional path bitmap
    pub path: U256,
}

/// Collection of claim test cases
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTestFixtures {
    /// All test cases
    pub test_cases: Vec<ClaimTestCase>,
}

impl ClaimTestFixtures {
    /// Load test fixtures from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let fixtures: Self = serde_json::from_str(&content)?;
        Ok(fixtures)
    }

    /// Load the default fixtures
    pub fn load_default() -> eyre::Result<Self> {
        let fixture_path =
            concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/merkle/claim_fixtures.json");
        Self::load_from_file(fixture_path)
    }

    /// Get all test cases
    pub fn test_cases(&self) -> &[ClaimTestCase] {
        &self.test_cases
    }

    /// Find a test case by name
    pub fn find_by_name(&self, name: &str) -> Option<&ClaimTestCase> {
        self.test_cases.iter().find(|tc| tc.name == name)
    }
}

#[test]
fn test_load_fixtures() {
    let fixtures = ClaimTestFixtures::load_default().expect("Failed to load fixtures");
    assert!(!fixtures.test_cases().is_empty());

    let four = fixtures.find_by_name("four_leaves").expect("four_leaves test case not found");
    assert_eq!(four.leaves.len(), 4);
    assert_eq!(four.proofs.len(), 4);

    // Every proof corresponds to the right leaf
    for case in fixtures.test_cases() {
        assert_eq!(case.elements.len(), case.leaves.len(), "{}", case.name);
        for proof in &case.proofs {
            assert_eq!(proof.leaf, case.leaves[proof.index]);
        }
    }
}
