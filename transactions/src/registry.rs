//! The dispatcher's transaction type registry.
//!
//! The registry is plain data owned by whoever bootstraps the process and is
//! passed in explicitly; nothing registers itself at load time. Call
//! [`register`] once per mapper before any stake transaction is decoded.

use std::collections::{BTreeMap, HashMap};

use crate::error::{DispatchError, RegistryError};
use crate::{codec, BondTx, ModifyCommissionTx, NominateTx, Transaction, TxInner, UnbondTx};

type DecodeFn = fn(serde_json::Value) -> Result<Transaction, serde_json::Error>;

fn decode_as<T: TxInner>(data: serde_json::Value) -> Result<Transaction, serde_json::Error> {
    serde_json::from_value::<T>(data).map(Into::into)
}

#[derive(Clone, Copy)]
pub(crate) struct Registration {
    pub(crate) tag: &'static str,
    pub(crate) byte: u8,
    pub(crate) decode: DecodeFn,
}

/// Maps tags and wire bytes to decoders for registered transaction types.
#[derive(Clone, Default)]
pub struct TxMapper {
    by_byte: BTreeMap<u8, Registration>,
    by_tag: HashMap<&'static str, u8>,
}

impl TxMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapper with the four stake transaction types registered.
    pub fn with_stake_types() -> Self {
        let mut mapper = Self::new();
        register(&mut mapper).expect("fresh mapper has no conflicting registrations");
        mapper
    }

    /// Register `T` under its tag and wire byte. Both must be unused.
    pub fn register_implementation<T: TxInner>(&mut self) -> Result<(), RegistryError> {
        if self.by_tag.contains_key(T::TAG) {
            return Err(RegistryError::DuplicateTag(T::TAG));
        }
        if self.by_byte.contains_key(&T::BYTE) {
            return Err(RegistryError::DuplicateByte(T::BYTE));
        }
        self.by_tag.insert(T::TAG, T::BYTE);
        self.by_byte.insert(
            T::BYTE,
            Registration {
                tag: T::TAG,
                byte: T::BYTE,
                decode: decode_as::<T>,
            },
        );
        tracing::debug!(tag = T::TAG, byte = T::BYTE, "registered transaction type");
        Ok(())
    }

    pub fn tag_for(&self, byte: u8) -> Option<&'static str> {
        self.by_byte.get(&byte).map(|r| r.tag)
    }

    pub fn byte_for(&self, tag: &str) -> Option<u8> {
        self.by_tag.get(tag).copied()
    }

    pub fn is_registered_byte(&self, byte: u8) -> bool {
        self.by_byte.contains_key(&byte)
    }

    pub fn is_registered_tag(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    /// All registrations as `(tag, byte)`, ordered by byte.
    pub fn registered(&self) -> Vec<(&'static str, u8)> {
        self.by_byte.values().map(|r| (r.tag, r.byte)).collect()
    }

    pub fn len(&self) -> usize {
        self.by_byte.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_byte.is_empty()
    }

    pub(crate) fn lookup_byte(&self, byte: u8) -> Option<&Registration> {
        self.by_byte.get(&byte)
    }

    pub(crate) fn lookup_tag(&self, tag: &str) -> Option<&Registration> {
        self.by_tag.get(tag).and_then(|byte| self.by_byte.get(byte))
    }

    /// Decode a binary frame and run structural validation exactly once.
    ///
    /// A transaction that fails validation is never returned.
    pub fn admit(&self, frame: &[u8]) -> Result<Transaction, DispatchError> {
        let tx = codec::decode_frame(self, frame)?;
        Self::check(tx)
    }

    /// Like [`TxMapper::admit`], for a JSON envelope.
    pub fn admit_json(&self, json: &str) -> Result<Transaction, DispatchError> {
        let tx = codec::from_json(self, json)?;
        Self::check(tx)
    }

    fn check(tx: Transaction) -> Result<Transaction, DispatchError> {
        match tx.validate_basic() {
            Ok(()) => {
                tracing::debug!(tag = tx.tag(), actor = %tx.actor(), "admitted transaction");
                Ok(tx)
            }
            Err(e) => {
                tracing::warn!(tag = tx.tag(), error = %e, "rejected transaction");
                Err(e.into())
            }
        }
    }
}

/// Register the four stake transaction types with `mapper`.
///
/// Registration is one-shot: calling this again on the same mapper fails
/// with a duplicate error and leaves the mapper unchanged.
pub fn register(mapper: &mut TxMapper) -> Result<(), RegistryError> {
    let mut staged = mapper.clone();
    staged.register_implementation::<BondTx>()?;
    staged.register_implementation::<UnbondTx>()?;
    staged.register_implementation::<NominateTx>()?;
    staged.register_implementation::<ModifyCommissionTx>()?;
    *mapper = staged;
    Ok(())
}
