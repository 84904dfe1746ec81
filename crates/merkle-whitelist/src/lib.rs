//! Merkle roots and inclusion proofs for `(address, amount)` whitelists.
//!
//! The pipeline is:
//! - encode each entry ([`EntryEncoder`], ABI `(address, uint256)` by default)
//! - hash the encoding into a leaf ([`Keccak256Hasher`])
//! - build the tree level by level ([`MerkleTree`], [`TreeOptions`])
//! - extract and verify sibling paths ([`Proof`])
//!
//! ```
//! use alloy_primitives::{Address, U256};
//! use merkle_whitelist::{AbiEncoder, TreeOptions, WhitelistEntry, WhitelistTree};
//!
//! let entries = vec![
//!     WhitelistEntry::new(Address::repeat_byte(1), U256::from(10)),
//!     WhitelistEntry::new(Address::repeat_byte(2), U256::from(5)),
//! ];
//! let tree = WhitelistTree::build(entries, &AbiEncoder, TreeOptions::sorted()).unwrap();
//! let proof = tree.proof(1).unwrap();
//! assert!(proof.verify(&tree.root()));
//! ```

pub mod config;
pub mod encoder;
pub mod entry;
pub mod error;
pub mod hasher;
pub mod proof;
pub mod report;
pub mod tree;
pub mod whitelist;

pub use config::{RawAmount, RawEntry, WhitelistFile};
pub use encoder::{AbiEncoder, Encoding, EntryEncoder, PackedEncoder, SolRecord};
pub use entry::{WhitelistEntry, parse_address, parse_amount};
pub use error::{Result, WhitelistError};
pub use hasher::Keccak256Hasher;
pub use proof::{Proof, ProofNode, Side, verify_sorted};
pub use report::{ProofReport, RootReport};
pub use tree::{MerkleTree, TreeOptions};
pub use whitelist::{EntryProof, WhitelistTree};
