//! Error types for the whitelist pipeline

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WhitelistError>;

/// Errors raised while loading entries, building trees, or extracting proofs.
///
/// Every variant is a validation failure on static input, so none of them are
/// retryable.
#[derive(Debug, Error)]
pub enum WhitelistError {
    /// The address is not 20 bytes of hex.
    #[error("invalid address {value:?}: {reason}")]
    InvalidAddress {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The amount is negative, not a number, or wider than 256 bits.
    #[error("invalid amount {value:?}: {reason}")]
    InvalidAmount {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// A tree needs at least one leaf.
    #[error("cannot build a merkle tree from zero leaves")]
    EmptyTree,
    /// The requested leaf does not exist.
    #[error("leaf index {index} is out of range for {len} leaves")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of leaves available.
        len: usize,
    },
    /// An entry of a whitelist file failed validation.
    #[error("entry {index}: {source}")]
    InvalidEntry {
        /// Position of the entry in the file.
        index: usize,
        /// The underlying validation error.
        #[source]
        source: Box<WhitelistError>,
    },
    /// Reading a whitelist file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A whitelist file is not valid JSON for the expected layout.
    #[error("invalid whitelist file: {0}")]
    Json(#[from] serde_json::Error),
}

impl WhitelistError {
    /// Attach the position of the offending entry.
    pub fn at_entry(self, index: usize) -> Self {
        Self::InvalidEntry { index, source: Box::new(self) }
    }
}
