//! Ledger participant references.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypesError;

/// A reference to a ledger participant (delegator or validator).
///
/// The address is the raw key-derived identifier. `chain_id` and `app`
/// scope it to the chain and the module that issued it; both may be empty
/// for a plain address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Actor {
    #[serde(rename = "chain", default)]
    pub chain_id: String,
    #[serde(default)]
    pub app: String,
    #[serde(rename = "addr", with = "hex_bytes")]
    pub address: Vec<u8>,
}

impl Actor {
    pub fn new(chain_id: impl Into<String>, app: impl Into<String>, address: impl Into<Vec<u8>>) -> Self {
        Self {
            chain_id: chain_id.into(),
            app: app.into(),
            address: address.into(),
        }
    }

    /// An actor with no chain or app scope.
    pub fn from_address(address: impl Into<Vec<u8>>) -> Self {
        Self::new("", "", address)
    }

    /// Parse an actor from a hex-encoded address.
    pub fn from_hex(address: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(address).map_err(|e| TypesError::InvalidAddress(e.to_string()))?;
        Ok(Self::from_address(bytes))
    }

    /// Whether the address is unset.
    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
    }

    pub fn address_hex(&self) -> String {
        hex::encode(&self.address)
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.chain_id, self.app, self.address_hex())
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}
