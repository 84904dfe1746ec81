//! Merkle inclusion proofs and their verification

use crate::{hasher::Keccak256Hasher, tree::TreeOptions};
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Side of the concatenation a proof sibling occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Sibling is hashed first.
    Left,
    /// Sibling is hashed second.
    Right,
}

/// One step of a proof: the sibling digest and where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofNode {
    /// Position of the sibling relative to the running hash.
    pub position: Side,
    /// Sibling digest.
    pub hash: B256,
}

/// Merkle inclusion proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Index of the proven leaf in the tree's leaf layer
    pub leaf_index: usize,
    /// Sibling hashes from leaf to root
    pub nodes: Vec<ProofNode>,
}

impl Proof {
    /// Sibling digests in leaf-to-root order, without positions.
    pub fn siblings(&self) -> Vec<B256> {
        self.nodes.iter().map(|node| node.hash).collect()
    }

    /// Number of siblings.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the proof of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sibling digests as `0x`-prefixed hex strings.
    pub fn to_hex(&self) -> Vec<String> {
        self.nodes.iter().map(|node| format!("{:#x}", node.hash)).collect()
    }

    /// Compute root from proof
    pub fn compute_root(&self, leaf: B256, sort_pairs: bool) -> B256 {
        self.nodes.iter().fold(leaf, |current, node| match node.position {
            Side::Left => Keccak256Hasher::combine(&node.hash, &current, sort_pairs),
            Side::Right => Keccak256Hasher::combine(&current, &node.hash, sort_pairs),
        })
    }

    /// Verify this proof for `leaf` against a root hash
    pub fn verify(&self, leaf: B256, root: &B256, options: &TreeOptions) -> bool {
        self.compute_root(leaf, options.sort_pairs) == *root
    }
}

/// Verify a sorted-pair proof given only the sibling digests.
///
/// This is the check a contract performs when the tree was built with
/// `sort_pairs`; positions are not needed.
pub fn verify_sorted(leaf: B256, siblings: &[B256], root: &B256) -> bool {
    let computed = siblings
        .iter()
        .fold(leaf, |current, sibling| Keccak256Hasher::hash_sorted_pair(&current, sibling));
    computed == *root
}
