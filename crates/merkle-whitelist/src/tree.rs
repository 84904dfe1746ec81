//! Binary Merkle tree built level by level from 32-byte leaves
//!
//! Pairing rules:
//! - adjacent nodes are paired in order; with `sort_pairs` the two children are
//!   ordered ascending before they are concatenated
//! - an unpaired last node is promoted to the next level unchanged, or hashed
//!   with itself when `duplicate_odd` is set
//! - a single leaf is its own root

use crate::{
    error::{Result, WhitelistError},
    hasher::Keccak256Hasher,
    proof::{Proof, ProofNode, Side},
};
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Tree construction policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeOptions {
    /// Order each pair ascending before hashing.
    pub sort_pairs: bool,
    /// Sort the leaf layer ascending before building.
    pub sort_leaves: bool,
    /// Hash an unpaired last node with itself instead of promoting it.
    pub duplicate_odd: bool,
}

impl TreeOptions {
    /// Options with only `sort_pairs` enabled, the layout most claim
    /// contracts verify against.
    pub const fn sorted() -> Self {
        Self { sort_pairs: true, sort_leaves: false, duplicate_odd: false }
    }

    /// Enable every option set in either `self` or `other`.
    pub const fn merge(self, other: Self) -> Self {
        Self {
            sort_pairs: self.sort_pairs || other.sort_pairs,
            sort_leaves: self.sort_leaves || other.sort_leaves,
            duplicate_odd: self.duplicate_odd || other.duplicate_odd,
        }
    }
}

/// Merkle tree keeping every level, leaves first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    /// `layers[0]` holds the leaves, the last layer holds only the root
    layers: Vec<Vec<B256>>,
    /// Policy the tree was built with
    options: TreeOptions,
}

impl MerkleTree {
    /// Build a tree over `leaves`.
    pub fn new(mut leaves: Vec<B256>, options: TreeOptions) -> Result<Self> {
        if leaves.is_empty() {
            return Err(WhitelistError::EmptyTree);
        }
        if options.sort_leaves {
            leaves.sort_unstable();
        }

        let mut layers = vec![leaves];
        while let Some(level) = layers.last().filter(|level| level.len() > 1) {
            let next_level = Self::next_level(level, &options);
            layers.push(next_level);
        }

        let tree = Self { layers, options };
        tracing::debug!(
            target: "merkle_whitelist",
            leaf_count = tree.leaf_count(),
            depth = tree.depth(),
            root = %tree.root(),
            "Built merkle tree"
        );
        Ok(tree)
    }

    fn next_level(level: &[B256], options: &TreeOptions) -> Vec<B256> {
        level
            .chunks(2)
            .map(|chunk| match chunk {
                [left, right] => Keccak256Hasher::combine(left, right, options.sort_pairs),
                [odd] if options.duplicate_odd => Keccak256Hasher::combine(odd, odd, options.sort_pairs),
                [odd] => *odd,
                _ => unreachable!("chunks(2) yields one or two nodes"),
            })
            .collect()
    }

    /// Get the root hash
    pub fn root(&self) -> B256 {
        // `new` guarantees a non-empty top layer
        self.layers.last().and_then(|level| level.first()).copied().unwrap_or_default()
    }

    /// Leaf layer, after `sort_leaves` if it was requested.
    pub fn leaves(&self) -> &[B256] {
        &self.layers[0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of hashing levels between the leaves and the root.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// All levels, leaves first.
    pub fn layers(&self) -> &[Vec<B256>] {
        &self.layers
    }

    /// Policy the tree was built with.
    pub const fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Position of the first leaf equal to `leaf`.
    pub fn leaf_index(&self, leaf: &B256) -> Option<usize> {
        self.leaves().iter().position(|candidate| candidate == leaf)
    }

    /// Generate a proof for the leaf at `index`
    pub fn proof(&self, index: usize) -> Result<Proof> {
        let len = self.leaf_count();
        if index >= len {
            return Err(WhitelistError::IndexOutOfRange { index, len });
        }

        let mut nodes = Vec::with_capacity(self.depth());
        let mut current_index = index;

        // Walk from leaf to root, collecting sibling hashes
        for level in &self.layers[..self.depth()] {
            let is_right = current_index % 2 == 1;
            let sibling_index = if is_right { current_index - 1 } else { current_index + 1 };

            match level.get(sibling_index) {
                Some(sibling) => nodes.push(ProofNode {
                    position: if is_right { Side::Left } else { Side::Right },
                    hash: *sibling,
                }),
                // Unpaired last node: either re-hashed with itself or promoted
                None if self.options.duplicate_odd => {
                    nodes.push(ProofNode { position: Side::Right, hash: level[current_index] })
                }
                None => {}
            }

            current_index /= 2;
        }

        tracing::debug!(target: "merkle_whitelist", index, siblings = nodes.len(), "Extracted proof");
        Ok(Proof { leaf_index: index, nodes })
    }

    /// Verify `proof` for `leaf` against this tree's root.
    pub fn verify(&self, leaf: B256, proof: &Proof) -> bool {
        proof.verify(leaf, &self.root(), &self.options)
    }
}
