//! Wire discriminants for stake transactions.
//!
//! Tags and bytes are part of the wire format. Reassigning either one breaks
//! decoding of every persisted or broadcast transaction.

use std::fmt;

/// Name of the stake module; every tag is prefixed with it so the
/// dispatcher routes the transaction to this module's handler.
pub const MODULE_NAME: &str = "stake";

pub const BYTE_TX_BOND: u8 = 0x55;
pub const BYTE_TX_UNBOND: u8 = 0x56;
pub const BYTE_TX_NOMINATE: u8 = 0x57;
pub const BYTE_TX_MOD_COMM: u8 = 0x58;

pub const TYPE_TX_BOND: &str = "stake/bond";
pub const TYPE_TX_UNBOND: &str = "stake/unbond";
pub const TYPE_TX_NOMINATE: &str = "stake/nominate";
pub const TYPE_TX_MOD_COMM: &str = "stake/modComm";

const _: () = {
    let bytes = [BYTE_TX_BOND, BYTE_TX_UNBOND, BYTE_TX_NOMINATE, BYTE_TX_MOD_COMM];
    let mut i = 0;
    while i < bytes.len() {
        let mut j = i + 1;
        while j < bytes.len() {
            assert!(bytes[i] != bytes[j], "stake transaction bytes must be unique");
            j += 1;
        }
        i += 1;
    }
};

/// The four stake transaction variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TxKind {
    Bond,
    Unbond,
    Nominate,
    ModifyCommission,
}

impl TxKind {
    pub const ALL: [TxKind; 4] = [
        TxKind::Bond,
        TxKind::Unbond,
        TxKind::Nominate,
        TxKind::ModifyCommission,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bond => TYPE_TX_BOND,
            Self::Unbond => TYPE_TX_UNBOND,
            Self::Nominate => TYPE_TX_NOMINATE,
            Self::ModifyCommission => TYPE_TX_MOD_COMM,
        }
    }

    pub const fn byte(self) -> u8 {
        match self {
            Self::Bond => BYTE_TX_BOND,
            Self::Unbond => BYTE_TX_UNBOND,
            Self::Nominate => BYTE_TX_NOMINATE,
            Self::ModifyCommission => BYTE_TX_MOD_COMM,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.byte() == byte)
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
