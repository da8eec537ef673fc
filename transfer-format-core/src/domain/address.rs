//! Address domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::result::{Error, Result};

/// Length in bytes of an Ethereum-style account or contract address
const HEX_ADDRESS_BYTES: usize = 20;

/// Identifier of an account or token contract.
///
/// `0x`-prefixed 20-byte hex addresses are stored lowercase so that
/// checksum-cased and plain spellings compare equal. Anything else is kept
/// verbatim and treated as an opaque key. Ordering is lexicographic over the
/// stored form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    /// Parse an address, normalizing hex addresses to lowercase
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_address("address is empty"));
        }

        let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
            return Ok(Self(s.to_string()));
        };

        let bytes = hex::decode(digits)
            .map_err(|e| Error::invalid_address(format!("{}: {}", s, e)))?;
        if bytes.len() != HEX_ADDRESS_BYTES {
            return Err(Error::invalid_address(format!(
                "{}: expected {} bytes, got {}",
                s,
                HEX_ADDRESS_BYTES,
                bytes.len()
            )));
        }

        Ok(Self(format!("0x{}", hex::encode(bytes))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
