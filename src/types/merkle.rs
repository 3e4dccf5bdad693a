//! Merkle trees and proof verification compatible with `merkletreejs`.
//!
//! Roots are published from trees built off-chain with `merkletreejs` using
//! `{ hashLeaves: true, sortPairs: true }`. This module mirrors that construction:
//! - Sorted hash pairs: `keccak256(min(a, b) || max(a, b))`
//! - An odd trailing node is promoted to the next layer unchanged
//! - Left-to-right tree construction
//!
//! The combination rule is a [`ProofScheme`], so a deployment whose proofs are positional
//! (left/right given by a path bitmap) can select [`Positional`] instead.

pub use crate::error::MerkleError;
use alloy::primitives::{B256, U256, keccak256};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{Display, EnumString};

/// Maximum supported tree size to prevent overflow
#[cfg(target_pointer_width = "64")]
const MAX_TREE_SIZE: usize = 1 << 30;

#[cfg(target_pointer_width = "32")]
const MAX_TREE_SIZE: usize = 1 << 20;

/// Identifies a [`ProofScheme`] implementation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProofSchemeKind {
    /// Order-independent sorted pairs.
    #[default]
    SortedPairs,
    /// Left/right flags carried in a path bitmap.
    Positional,
}

impl ProofSchemeKind {
    /// Returns the scheme implementation for this kind.
    pub fn as_scheme(self) -> &'static dyn ProofScheme {
        match self {
            Self::SortedPairs => &SortedPairs,
            Self::Positional => &Positional,
        }
    }

    /// Returns a boxed scheme implementation for this kind.
    pub fn into_scheme(self) -> Box<dyn ProofScheme> {
        match self {
            Self::SortedPairs => Box::new(SortedPairs),
            Self::Positional => Box::new(Positional),
        }
    }
}

/// Rule for combining two nodes into their parent.
pub trait ProofScheme: Debug + Send + Sync {
    /// Returns the identifier of this scheme.
    fn kind(&self) -> ProofSchemeKind;

    /// Hashes a `left` and `right` child into their parent.
    fn combine(&self, left: &B256, right: &B256) -> B256;

    /// Recomputes the root from a leaf and its proof.
    ///
    /// Bit `i` of `path` set means the running hash is the right child at proof step `i`.
    fn compute_root(&self, leaf: B256, proof: &[B256], path: U256) -> B256 {
        proof.iter().enumerate().fold(leaf, |current, (step, sibling)| {
            if step < U256::BITS && path.bit(step) {
                self.combine(sibling, &current)
            } else {
                self.combine(&current, sibling)
            }
        })
    }

    /// Verifies a Merkle proof.
    fn verify(&self, root: &B256, proof: &[B256], leaf: &B256, path: U256) -> bool {
        self.compute_root(*leaf, proof, path) == *root
    }
}

/// Sorted-pair combination. Proof position is irrelevant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedPairs;

impl ProofScheme for SortedPairs {
    fn kind(&self) -> ProofSchemeKind {
        ProofSchemeKind::SortedPairs
    }

    #[inline]
    fn combine(&self, left: &B256, right: &B256) -> B256 {
        hash_leaf_pairs(left, right, &mut [0u8; 64])
    }

    fn compute_root(&self, leaf: B256, proof: &[B256], _path: U256) -> B256 {
        let mut rolling_hash = leaf;
        let mut hash_buffer = [0u8; 64];

        for sibling in proof {
            rolling_hash = hash_leaf_pairs(&rolling_hash, sibling, &mut hash_buffer);
        }

        rolling_hash
    }
}

/// Positional combination, `keccak256(left || right)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

impl ProofScheme for Positional {
    fn kind(&self) -> ProofSchemeKind {
        ProofSchemeKind::Positional
    }

    #[inline]
    fn combine(&self, left: &B256, right: &B256) -> B256 {
        let mut buffer = [0u8; 64];
        buffer[..32].copy_from_slice(left.as_ref());
        buffer[32..].copy_from_slice(right.as_ref());
        keccak256(buffer)
    }
}

/// A proof for one leaf of a [`MerkleTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Index of the leaf this proof is for.
    pub index: usize,
    /// Sibling hashes from leaf to root.
    pub siblings: Vec<B256>,
    /// Bitmap of proof steps at which the running hash is the right child.
    pub path: U256,
}

/// A memory-efficient Merkle tree with lazy evaluation for low construction cost
///
/// All nodes live in a single allocation, leaves first, then each layer up to the root.
/// Internal nodes are only computed when a root or proof is first requested.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Single allocation containing all tree nodes
    nodes: Vec<B256>,
    /// Number of leaves in the tree
    leaf_count: usize,
    /// Whether the tree has been computed
    computed: bool,
    /// Cached height for efficiency
    height: usize,
    /// Pre-calculated layer sizes, root layer excluded
    layer_sizes: Vec<usize>,
    /// Pre-calculated layer offsets for fast proof generation
    layer_offsets: Vec<usize>,
    /// Combination rule
    scheme: ProofSchemeKind,
}

impl MerkleTree {
    /// Create a sorted-pair Merkle tree from leaf hashes.
    pub fn from_leaves<I>(leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = B256>,
    {
        Self::with_scheme(leaves, ProofSchemeKind::SortedPairs)
    }

    /// Create a Merkle tree from leaf hashes using the given combination rule.
    pub fn with_scheme<I>(leaves: I, scheme: ProofSchemeKind) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = B256>,
    {
        let mut nodes: Vec<B256> = leaves.into_iter().collect();
        let leaf_count = nodes.len();
        if leaf_count == 0 {
            return Err(MerkleError::EmptyTree);
        }

        if leaf_count > MAX_TREE_SIZE {
            return Err(MerkleError::TooLarge);
        }

        // Single leaf has height 0
        let height = log2_ceil(leaf_count);

        let (layer_sizes, total_nodes) = Self::calculate_layer_sizes_and_total(leaf_count, height)?;
        let layer_offsets = Self::calculate_layer_offsets(&layer_sizes);

        nodes.resize(total_nodes, B256::ZERO);

        Ok(Self { nodes, leaf_count, computed: false, height, layer_sizes, layer_offsets, scheme })
    }

    /// Ensure the tree is computed (lazy evaluation)
    fn ensure_computed(&mut self) {
        if self.leaf_count <= 1 || self.computed {
            self.computed = true;
            return;
        }

        let scheme = self.scheme.as_scheme();
        let mut read_offset = 0;

        for layer in 0..self.height {
            let layer_size = self.layer_sizes[layer];
            let write_offset = read_offset + layer_size;
            let pairs = layer_size / 2;

            let mut idx = read_offset;
            for i in 0..pairs {
                self.nodes[write_offset + i] =
                    scheme.combine(&self.nodes[idx], &self.nodes[idx + 1]);
                idx += 2;
            }

            // Odd trailing node moves up as is
            if layer_size & 1 == 1 {
                self.nodes[write_offset + pairs] = self.nodes[read_offset + layer_size - 1];
            }

            read_offset = write_offset;
        }

        self.computed = true;
    }

    /// Get the number of leaves
    #[inline]
    pub fn len(&self) -> usize {
        self.leaf_count
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    /// Get the tree height
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the combination rule
    #[inline]
    pub fn scheme(&self) -> ProofSchemeKind {
        self.scheme
    }

    /// Get a reference to the leaves
    #[inline]
    pub fn leaves(&self) -> &[B256] {
        &self.nodes[..self.leaf_count]
    }

    /// Get the Merkle root (computed on first access)
    pub fn root(&mut self) -> B256 {
        if self.leaf_count == 1 {
            return self.nodes[0];
        }

        self.ensure_computed();
        self.nodes[self.nodes.len() - 1]
    }

    /// Generate a Merkle proof.
    ///
    /// A single-leaf tree yields an empty proof.
    pub fn proof(&mut self, index: usize) -> Result<MerkleProof, MerkleError> {
        if index >= self.leaf_count {
            return Err(MerkleError::IndexOutOfBounds { index, tree_size: self.leaf_count });
        }

        self.ensure_computed();

        let mut siblings = Vec::with_capacity(self.height);
        let mut path = U256::ZERO;
        let mut current_index = index;

        for layer in 0..self.height {
            let layer_size = self.layer_sizes[layer];
            let layer_offset = self.layer_offsets[layer];

            // Find sibling using XOR - flips LSB (even->odd, odd->even)
            let sibling_index = current_index ^ 1;

            // A promoted node has no sibling on this layer
            if sibling_index < layer_size {
                if current_index & 1 == 1 {
                    path.set_bit(siblings.len(), true);
                }
                siblings.push(self.nodes[layer_offset + sibling_index]);
            }

            current_index /= 2;
        }

        Ok(MerkleProof { index, siblings, path })
    }

    /// Verify a sorted-pair Merkle proof
    #[inline]
    pub fn verify_proof(root: &B256, proof: &[B256], leaf: &B256) -> bool {
        SortedPairs.verify(root, proof, leaf, U256::ZERO)
    }

    /// Calculate layer offsets from layer sizes
    fn calculate_layer_offsets(layer_sizes: &[usize]) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(layer_sizes.len());
        let mut offset = 0;

        for &size in layer_sizes {
            offsets.push(offset);
            offset += size;
        }

        offsets
    }

    /// Calculate layer sizes and total nodes needed
    ///
    /// The final root layer (size 1) is excluded from `layer_sizes`; the root is always at
    /// `nodes[nodes.len() - 1]`.
    fn calculate_layer_sizes_and_total(
        leaf_count: usize,
        height: usize,
    ) -> Result<(Vec<usize>, usize), MerkleError> {
        let mut layer_sizes = Vec::with_capacity(height);
        let mut current_size = leaf_count;
        let mut total_nodes = current_size;
        layer_sizes.push(current_size);

        for _ in 0..height {
            current_size = current_size.div_ceil(2);
            total_nodes = total_nodes.saturating_add(current_size);
            if total_nodes > MAX_TREE_SIZE * 2 {
                return Err(MerkleError::SizeCalculationOverflow);
            }
            if current_size > 1 {
                layer_sizes.push(current_size);
            }
        }

        Ok((layer_sizes, total_nodes))
    }
}

/// Hash two nodes together using the sorted approach from OpenZeppelin `MerkleProof.sol`
#[inline(always)]
fn hash_leaf_pairs(left: &B256, right: &B256, buffer: &mut [u8; 64]) -> B256 {
    let (first, second) = if left < right { (left, right) } else { (right, left) };

    buffer[..32].copy_from_slice(first.as_ref());
    buffer[32..].copy_from_slice(second.as_ref());

    keccak256(buffer)
}

/// Calculate the ceiling of log2(x)
#[inline]
fn log2_ceil(x: usize) -> usize {
    match x {
        0 | 1 => 0,
        _ => (x - 1).ilog2() as usize + 1,
    }
}
