//! End-to-end checks against the sample whitelist in `data/whitelist.json`.

use alloy_primitives::{B256, U256, b256};
use merkle_whitelist::{
    AbiEncoder, Keccak256Hasher, MerkleTree, TreeOptions, WhitelistEntry, WhitelistError,
    WhitelistFile, WhitelistTree, verify_sorted,
};
use std::path::PathBuf;

/// Root of the sample whitelist with sorted pairs and promoted odd nodes.
const SORTED_ROOT: B256 = b256!("1430dceec9a5f4eed9f79f00e6e1e05ae1417b01bb3722744750ee22d740c15b");

/// Root of the sample whitelist with positional pairs.
const UNSORTED_ROOT: B256 = b256!("eafbf6991962327059404ed442217433d93634530a9846a0a31244545a28d193");

/// Root of the sample whitelist with sorted pairs and duplicated odd nodes.
const DUPLICATE_ODD_ROOT: B256 =
    b256!("feb5bb40f0da0a14ec405c77a3e7791ed24638d9a2e0a3acc3d2db425d3c0de8");

fn sample_file() -> WhitelistFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/whitelist.json");
    WhitelistFile::from_path(path).unwrap()
}

fn sample_entries() -> Vec<WhitelistEntry> {
    sample_file().entries().unwrap()
}

fn build(entries: Vec<WhitelistEntry>, options: TreeOptions) -> WhitelistTree {
    WhitelistTree::build(entries, &AbiEncoder, options).unwrap()
}

#[test]
fn test_sample_file_settings() {
    let file = sample_file();
    assert_eq!(file.entries.len(), 7);
    assert_eq!(file.options, TreeOptions::sorted());
    assert_eq!(file.proof_index, Some(4));
}

#[test]
fn test_first_leaf() {
    let tree = build(sample_entries(), TreeOptions::sorted());
    assert_eq!(
        tree.leaf(0).unwrap(),
        b256!("5a76668df52ac6efbd3dcf64232d908413f300c7f482d5aea7f94a4960e995b9")
    );
}

#[test]
fn test_sample_roots() {
    assert_eq!(build(sample_entries(), TreeOptions::sorted()).root(), SORTED_ROOT);
    assert_eq!(build(sample_entries(), TreeOptions::default()).root(), UNSORTED_ROOT);
    let duplicate = TreeOptions { duplicate_odd: true, ..TreeOptions::sorted() };
    assert_eq!(build(sample_entries(), duplicate).root(), DUPLICATE_ODD_ROOT);
}

#[test]
fn test_proof_for_entry_e() {
    let tree = build(sample_entries(), TreeOptions::sorted());
    let proof = tree.proof(4).unwrap();

    assert_eq!(
        proof.proof.siblings(),
        vec![
            b256!("d462fcaac3b6b47db021617bc02411795ceacbb2b038cae9cbbb34a3cc1004e5"),
            b256!("6b2581c98a68c7ac10c929027ca514ac41b65886075595252df27d1d0b4e1909"),
            b256!("950eb23db95ec5cb37d4199176d18b1d10a4f8f6891302aaae397911db50a590"),
        ]
    );
    assert!(proof.verify(&SORTED_ROOT));
    assert!(verify_sorted(proof.leaf, &proof.proof.siblings(), &SORTED_ROOT));
}

#[test]
fn test_changed_amount_fails() {
    let tree = build(sample_entries(), TreeOptions::sorted());
    let proof = tree.proof(4).unwrap();

    let mut changed = sample_entries();
    changed[4].amount = U256::from(10);
    let changed_tree = build(changed, TreeOptions::sorted());

    assert_ne!(changed_tree.root(), SORTED_ROOT);
    assert!(!proof.verify(&changed_tree.root()));

    // the changed entry cannot reuse the original proof either
    let forged_leaf = changed_tree.leaf(4).unwrap();
    assert!(!proof.proof.verify(forged_leaf, &SORTED_ROOT, &TreeOptions::sorted()));
}

#[test]
fn test_every_index_round_trips() {
    for options in [TreeOptions::default(), TreeOptions::sorted()] {
        let tree = build(sample_entries(), options);
        for index in 0..tree.len() {
            assert!(tree.proof(index).unwrap().verify(&tree.root()), "index {index}, {options:?}");
        }
    }
}

#[test]
fn test_mutated_sibling_fails() {
    let tree = build(sample_entries(), TreeOptions::sorted());
    for index in 0..tree.len() {
        let proof = tree.proof(index).unwrap();
        for node in 0..proof.proof.len() {
            for byte in 0..32 {
                let mut tampered = proof.clone();
                tampered.proof.nodes[node].hash.0[byte] ^= 0x01;
                assert!(!tampered.verify(&tree.root()), "index {index}, node {node}, byte {byte}");
            }
        }
    }
}

#[test]
fn test_build_is_deterministic() {
    let first = build(sample_entries(), TreeOptions::sorted());
    let second = build(sample_entries(), TreeOptions::sorted());
    assert_eq!(first.root(), second.root());
    assert_eq!(first.tree(), second.tree());
}

#[test]
fn test_reordering_changes_unsorted_root() {
    let mut reordered = sample_entries();
    reordered.swap(0, 1);
    assert_ne!(build(reordered, TreeOptions::default()).root(), UNSORTED_ROOT);
}

#[test]
fn test_sibling_swaps_keep_sorted_root() {
    // leaves 0 and 1 are siblings at the first level
    let mut swapped = sample_entries();
    swapped.swap(0, 1);
    assert_eq!(build(swapped, TreeOptions::sorted()).root(), SORTED_ROOT);

    // nodes (0, 1) and (2, 3) are siblings at the second level
    let mut swapped = sample_entries();
    swapped[..4].rotate_left(2);
    assert_eq!(build(swapped, TreeOptions::sorted()).root(), SORTED_ROOT);
}

#[test]
fn test_single_entry_root_is_leaf() {
    let entries = vec![sample_entries()[0]];
    let tree = build(entries, TreeOptions::sorted());
    assert_eq!(tree.root(), tree.leaf(0).unwrap());
    assert!(tree.proof(0).unwrap().proof.is_empty());
}

#[test]
fn test_boundaries() {
    let err = MerkleTree::new(Vec::new(), TreeOptions::sorted()).unwrap_err();
    assert!(matches!(err, WhitelistError::EmptyTree));

    let tree = build(sample_entries(), TreeOptions::sorted());
    let err = tree.proof(7).unwrap_err();
    assert!(matches!(err, WhitelistError::IndexOutOfRange { index: 7, len: 7 }));
}

#[test]
fn test_leaf_matches_manual_hash() {
    let entry = sample_entries()[3];
    let mut preimage = [0u8; 64];
    preimage[12..32].copy_from_slice(entry.address.as_slice());
    preimage[32..].copy_from_slice(&entry.amount.to_be_bytes::<32>());

    let tree = build(sample_entries(), TreeOptions::default());
    assert_eq!(tree.leaf(3).unwrap(), Keccak256Hasher::hash(&preimage));
}
