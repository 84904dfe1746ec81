//! Leaf encoding strategies
//!
//! An encoder turns one record into the bytes that get hashed into its leaf.
//! The pipeline only depends on [`EntryEncoder`], so any schema can be used:
//! implement [`SolRecord`] to reuse the ABI encoders, or pass a closure.

use crate::entry::WhitelistEntry;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Strategy that serializes a record into leaf preimage bytes.
///
/// Implementations must be pure: the same record always yields the same bytes.
pub trait EntryEncoder<T> {
    /// Encode one record.
    fn encode(&self, record: &T) -> Vec<u8>;
}

impl<T, F> EntryEncoder<T> for F
where
    F: Fn(&T) -> Vec<u8>,
{
    fn encode(&self, record: &T) -> Vec<u8> {
        self(record)
    }
}

/// A record that maps onto a Solidity tuple.
pub trait SolRecord {
    /// Rust representation of the Solidity tuple, e.g. `(Address, U256)`.
    type Tuple: SolValue;

    /// Field values in schema order.
    fn to_sol(&self) -> Self::Tuple;
}

impl SolRecord for WhitelistEntry {
    type Tuple = (Address, U256);

    fn to_sol(&self) -> Self::Tuple {
        (self.address, self.amount)
    }
}

/// Standard ABI encoding of the record's tuple (`abi.encode`).
///
/// For `(address, uint256)` this is the address left-padded to 32 bytes
/// followed by the amount as a 32-byte big-endian integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbiEncoder;

impl<T: SolRecord> EntryEncoder<T> for AbiEncoder {
    fn encode(&self, record: &T) -> Vec<u8> {
        record.to_sol().abi_encode()
    }
}

/// Packed encoding of the record's tuple (`abi.encodePacked`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedEncoder;

impl<T: SolRecord> EntryEncoder<T> for PackedEncoder {
    fn encode(&self, record: &T) -> Vec<u8> {
        record.to_sol().abi_encode_packed()
    }
}

/// Encoder selection for configuration files and the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// [`AbiEncoder`]
    #[default]
    Abi,
    /// [`PackedEncoder`]
    Packed,
}

impl Encoding {
    /// Returns the string representation of the encoding.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abi => "abi",
            Self::Packed => "packed",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abi" => Ok(Self::Abi),
            "packed" => Ok(Self::Packed),
            other => Err(format!("unknown encoding {other:?}, expected \"abi\" or \"packed\"")),
        }
    }
}

impl<T: SolRecord> EntryEncoder<T> for Encoding {
    fn encode(&self, record: &T) -> Vec<u8> {
        match self {
            Self::Abi => AbiEncoder.encode(record),
            Self::Packed => PackedEncoder.encode(record),
        }
    }
}
