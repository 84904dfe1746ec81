//! Printable root and proof reports

use crate::{
    entry::WhitelistEntry,
    tree::TreeOptions,
    whitelist::{EntryProof, WhitelistTree},
};
use serde::Serialize;
use std::fmt;

/// Summary of a built tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootReport {
    /// Root digest, `0x`-prefixed hex.
    pub root: String,
    /// Number of leaves.
    pub leaf_count: usize,
    /// Hashing levels between leaves and root.
    pub depth: usize,
    /// Policy the tree was built with.
    pub options: TreeOptions,
}

impl<T> From<&WhitelistTree<T>> for RootReport {
    fn from(tree: &WhitelistTree<T>) -> Self {
        Self {
            root: format!("{:#x}", tree.root()),
            leaf_count: tree.tree().leaf_count(),
            depth: tree.tree().depth(),
            options: *tree.tree().options(),
        }
    }
}

impl fmt::Display for RootReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Merkle root: {}", self.root)?;
        write!(f, "Leaves: {}, depth: {}", self.leaf_count, self.depth)
    }
}

/// Inclusion proof of one whitelist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofReport {
    /// Root digest the proof verifies against.
    pub root: String,
    /// Position of the entry in the whitelist.
    pub index: usize,
    /// Checksummed address of the entry.
    pub address: String,
    /// Amount, in decimal.
    pub amount: String,
    /// Leaf digest of the entry.
    pub leaf: String,
    /// Sibling digests from leaf to root.
    pub proof: Vec<String>,
}

impl ProofReport {
    /// Describe `proof` as generated from `tree`.
    pub fn new(tree: &WhitelistTree, proof: &EntryProof<WhitelistEntry>) -> Self {
        Self {
            root: format!("{:#x}", tree.root()),
            index: proof.index,
            address: proof.record.address.to_checksum(None),
            amount: proof.record.amount.to_string(),
            leaf: format!("{:#x}", proof.leaf),
            proof: proof.proof.to_hex(),
        }
    }
}

impl fmt::Display for ProofReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Merkle root: {}", self.root)?;
        writeln!(f, "Entry #{}: {} {}", self.index, self.address, self.amount)?;
        writeln!(f, "Leaf: {}", self.leaf)?;
        write!(f, "Proof ({} nodes):", self.proof.len())?;
        for sibling in &self.proof {
            write!(f, "\n  {sibling}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::AbiEncoder;
    use alloy_primitives::{Address, U256};

    #[test]
    fn test_proof_report() {
        let entries: Vec<_> =
            (1u8..=3).map(|i| WhitelistEntry::new(Address::repeat_byte(i), U256::from(i))).collect();
        let tree = WhitelistTree::build(entries, &AbiEncoder, TreeOptions::sorted()).unwrap();
        let proof = tree.proof(1).unwrap();
        let report = ProofReport::new(&tree, &proof);

        assert_eq!(report.index, 1);
        assert_eq!(report.amount, "2");
        assert_eq!(report.proof.len(), 2);
        assert!(report.root.starts_with("0x") && report.root.len() == 66);

        let rendered = report.to_string();
        assert!(rendered.contains(&report.leaf));
        assert!(rendered.contains("Proof (2 nodes):"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["proof"].as_array().unwrap().len(), 2);
        assert!(json.get("leaf").is_some());
    }

    #[test]
    fn test_root_report() {
        let entries = vec![WhitelistEntry::new(Address::repeat_byte(9), U256::from(1))];
        let tree = WhitelistTree::build(entries, &AbiEncoder, TreeOptions::default()).unwrap();
        let report = RootReport::from(&tree);
        assert_eq!(report.leaf_count, 1);
        assert_eq!(report.depth, 0);
        assert_eq!(report.root, format!("{:#x}", tree.leaf(0).unwrap()));
        assert_eq!(serde_json::to_value(&report).unwrap()["leafCount"], 1);
    }
}
