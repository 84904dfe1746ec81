//! Keccak256 hasher for leaves and internal nodes

use alloy_primitives::B256;
use tiny_keccak::{Hasher, Keccak};

/// Keccak256 hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Hash a single value (used for leaves)
    pub fn hash(data: &[u8]) -> B256 {
        let mut hasher = Keccak::v256();
        hasher.update(data);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        B256::from(output)
    }

    /// Hash two 32-byte values together, left first
    pub fn hash_pair(left: &B256, right: &B256) -> B256 {
        let mut hasher = Keccak::v256();
        hasher.update(left.as_slice());
        hasher.update(right.as_slice());
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        B256::from(output)
    }

    /// Hash two values after ordering them ascending, so the result does not
    /// depend on which side each one came from.
    pub fn hash_sorted_pair(a: &B256, b: &B256) -> B256 {
        if a <= b { Self::hash_pair(a, b) } else { Self::hash_pair(b, a) }
    }

    /// Combine two children under the given pairing policy.
    pub fn combine(left: &B256, right: &B256, sort_pairs: bool) -> B256 {
        if sort_pairs { Self::hash_sorted_pair(left, right) } else { Self::hash_pair(left, right) }
    }
}
