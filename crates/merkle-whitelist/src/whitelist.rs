//! Whitelist pipeline: encode → hash → build → prove

use crate::{
    encoder::EntryEncoder,
    entry::WhitelistEntry,
    error::{Result, WhitelistError},
    hasher::Keccak256Hasher,
    proof::Proof,
    tree::{MerkleTree, TreeOptions},
};
use alloy_primitives::B256;

/// Merkle tree over a list of records, addressable by record index.
#[derive(Clone, Debug)]
pub struct WhitelistTree<T = WhitelistEntry> {
    /// Records in input order
    records: Vec<T>,
    /// Leaf of each record, in input order
    leaves: Vec<B256>,
    /// Tree over the leaves
    tree: MerkleTree,
}

impl<T> WhitelistTree<T> {
    /// Encode and hash every record, then build the tree.
    pub fn build<E>(records: Vec<T>, encoder: &E, options: TreeOptions) -> Result<Self>
    where
        E: EntryEncoder<T>,
    {
        let leaves: Vec<B256> =
            records.iter().map(|record| Keccak256Hasher::hash(&encoder.encode(record))).collect();
        let tree = MerkleTree::new(leaves.clone(), options)?;

        tracing::info!(
            target: "merkle_whitelist",
            entries = records.len(),
            depth = tree.depth(),
            root = %tree.root(),
            "Built whitelist tree"
        );
        Ok(Self { records, leaves, tree })
    }

    /// Get the root hash
    pub fn root(&self) -> B256 {
        self.tree.root()
    }

    /// Records in input order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the tree has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Leaf of the record at `index`.
    pub fn leaf(&self, index: usize) -> Result<B256> {
        self.leaves
            .get(index)
            .copied()
            .ok_or(WhitelistError::IndexOutOfRange { index, len: self.leaves.len() })
    }

    /// Underlying tree.
    pub const fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Generate the inclusion proof for the record at `index`.
    ///
    /// `index` is the record's position in the input list, also when the tree
    /// was built with `sort_leaves`.
    pub fn proof(&self, index: usize) -> Result<EntryProof<T>>
    where
        T: Clone,
    {
        let leaf = self.leaf(index)?;
        let tree_index = if self.tree.options().sort_leaves {
            self.tree.leaf_index(&leaf).ok_or(WhitelistError::IndexOutOfRange {
                index,
                len: self.tree.leaf_count(),
            })?
        } else {
            index
        };
        let proof = self.tree.proof(tree_index)?;

        Ok(EntryProof {
            index,
            record: self.records[index].clone(),
            leaf,
            proof,
            options: *self.tree.options(),
        })
    }
}

/// Proof of membership for one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryProof<T = WhitelistEntry> {
    /// Position of the record in the input list.
    pub index: usize,
    /// The proven record.
    pub record: T,
    /// Leaf digest of the record.
    pub leaf: B256,
    /// Sibling path from the leaf to the root.
    pub proof: Proof,
    /// Policy the tree was built with.
    pub options: TreeOptions,
}

impl<T> EntryProof<T> {
    /// Check the proof against `root`.
    pub fn verify(&self, root: &B256) -> bool {
        self.proof.verify(self.leaf, root, &self.options)
    }
}
