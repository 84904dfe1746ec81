//! Whitelist files
//!
//! A whitelist file is JSON of the form:
//!
//! ```json
//! {
//!   "entries": [{ "address": "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4", "amount": 10 }],
//!   "options": { "sortPairs": true },
//!   "encoding": "abi",
//!   "proofIndex": 0
//! }
//! ```
//!
//! Only `entries` is required. Amounts may be JSON integers of any width or
//! decimal / `0x`-hex strings.

use crate::{
    encoder::Encoding,
    entry::{WhitelistEntry, parse_address, parse_amount},
    error::{Result, WhitelistError},
    tree::TreeOptions,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Amount as written in a whitelist file.
///
/// Numbers keep their literal text, so integers wider than `u64` and
/// malformed values both reach [`parse_amount`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// JSON number.
    Number(serde_json::Number),
    /// Decimal or `0x`-hex string.
    Text(String),
    /// Any other JSON value, always rejected.
    Other(serde_json::Value),
}

impl RawAmount {
    fn to_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Other(value) => value.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(value) => Self::Number(value),
            serde_json::Value::String(value) => Self::Text(value),
            other => Self::Other(other),
        })
    }
}

/// Unvalidated entry as written in a whitelist file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Hex address.
    pub address: String,
    /// Claimable amount.
    pub amount: RawAmount,
}

impl RawEntry {
    /// Validate into a typed entry.
    pub fn validate(&self) -> Result<WhitelistEntry> {
        let address = parse_address(&self.address)?;
        let amount = parse_amount(&self.amount.to_text())?;
        Ok(WhitelistEntry::new(address, amount))
    }
}

/// Contents of a whitelist file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistFile {
    /// Entries in leaf order
    pub entries: Vec<RawEntry>,
    /// Tree construction policy
    #[serde(default)]
    pub options: TreeOptions,
    /// Leaf encoding
    #[serde(default)]
    pub encoding: Encoding,
    /// Entry to prove when the caller does not pick one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_index: Option<usize>,
}

impl WhitelistFile {
    /// Load from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let file = Self::from_json(&contents)?;
        tracing::debug!(
            target: "merkle_whitelist",
            ?path,
            entries = file.entries.len(),
            "Loaded whitelist file"
        );
        Ok(file)
    }

    /// Parse from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Validate every entry, failing on the first bad one.
    pub fn entries(&self) -> Result<Vec<WhitelistEntry>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, raw)| raw.validate().map_err(|e| e.at_entry(index)))
            .collect()
    }
}
