//! Whitelist entries and their validation

use crate::error::{Result, WhitelistError};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Length of an address in hex characters, without the `0x` prefix.
const ADDRESS_HEX_LEN: usize = 40;

/// One `(address, amount)` record of a whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WhitelistEntry {
    /// Account allowed to claim.
    pub address: Address,
    /// Amount the account may claim.
    pub amount: U256,
}

impl WhitelistEntry {
    /// Create an entry from already-typed values.
    pub const fn new(address: Address, amount: U256) -> Self {
        Self { address, amount }
    }

    /// Parse an entry from its textual address and amount.
    pub fn parse(address: &str, amount: &str) -> Result<Self> {
        Ok(Self { address: parse_address(address)?, amount: parse_amount(amount)? })
    }
}

impl fmt::Display for WhitelistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address.to_checksum(None), self.amount)
    }
}

/// Parse a 20-byte address, with or without the `0x` prefix.
///
/// The checksum casing is not enforced; mixed-case input is accepted as is.
pub fn parse_address(value: &str) -> Result<Address> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.len() != ADDRESS_HEX_LEN {
        return Err(WhitelistError::InvalidAddress {
            value: value.to_string(),
            reason: format!("expected {ADDRESS_HEX_LEN} hex chars, got {}", digits.len()),
        });
    }
    Address::from_str(digits).map_err(|e| WhitelistError::InvalidAddress {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a non-negative amount that fits in 256 bits.
///
/// Accepts decimal digits or `0x`-prefixed hex.
pub fn parse_amount(value: &str) -> Result<U256> {
    let trimmed = value.trim();
    if trimmed.starts_with('-') {
        return Err(WhitelistError::InvalidAmount {
            value: value.to_string(),
            reason: "amount must not be negative".to_string(),
        });
    }
    if trimmed.is_empty() {
        return Err(WhitelistError::InvalidAmount {
            value: value.to_string(),
            reason: "amount is empty".to_string(),
        });
    }
    let (digits, radix) = match trimmed.strip_prefix("0x") {
        Some(digits) => (digits, 16),
        None => (trimmed, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(WhitelistError::InvalidAmount {
            value: value.to_string(),
            reason: format!("expected base-{radix} digits"),
        });
    }
    U256::from_str_radix(digits, radix as u64).map_err(|e| WhitelistError::InvalidAmount {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
