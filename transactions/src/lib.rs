//! Stake module transactions and their structural validation.
//!
//! Transaction types:
//! - **Bond**: delegate an amount to a validator
//! - **Unbond**: release an amount previously delegated
//! - **Nominate**: register a validator candidate with a self-bond and commission rate
//! - **ModifyCommission**: change an existing validator's commission rate
//!
//! Constructors are total: any combination of fields can be assembled into a
//! [`Transaction`]. Validation is a separate step ([`Transaction::validate_basic`]),
//! run by the dispatcher ([`TxMapper::admit`]) before the transaction reaches
//! execution. Only the shape of a transaction is checked here, never whether
//! it can succeed against current ledger state.

pub mod bonding;
pub mod codec;
pub mod commission;
pub mod error;
pub mod kind;
pub mod nominate;
pub mod registry;
pub mod validation;

pub use bonding::{BondTx, BondingTx, UnbondTx};
pub use commission::ModifyCommissionTx;
pub use error::{CodecError, DispatchError, RegistryError, TransactionError};
pub use kind::{TxKind, MODULE_NAME};
pub use nominate::NominateTx;
pub use registry::{register, TxMapper};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stake_types::{Actor, Coin, Decimal};

/// What every stake transaction variant provides to the dispatcher: a stable
/// tag and wire byte, a self-describing encoding, and a structural check.
pub trait TxInner: Serialize + DeserializeOwned + Into<Transaction> {
    const KIND: TxKind;
    const TAG: &'static str = Self::KIND.tag();
    const BYTE: u8 = Self::KIND.byte();

    fn validate_basic(&self) -> Result<(), TransactionError>;

    /// Wrap into the dispatch envelope.
    fn wrap(self) -> Transaction {
        self.into()
    }
}

/// The dispatch envelope for all stake transactions.
///
/// Serialized as `{"type": "<tag>", "data": {..fields..}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Transaction {
    #[serde(rename = "stake/bond")]
    Bond(BondTx),
    #[serde(rename = "stake/unbond")]
    Unbond(UnbondTx),
    #[serde(rename = "stake/nominate")]
    Nominate(NominateTx),
    #[serde(rename = "stake/modComm")]
    ModifyCommission(ModifyCommissionTx),
}

impl Transaction {
    pub fn bond(delegatee: Actor, amount: Coin) -> Self {
        BondTx(BondingTx::new(delegatee, amount)).wrap()
    }

    pub fn unbond(delegatee: Actor, amount: Coin) -> Self {
        UnbondTx(BondingTx::new(delegatee, amount)).wrap()
    }

    pub fn nominate(nominee: Actor, amount: Coin, commission: Decimal) -> Self {
        NominateTx::new(nominee, amount, commission).wrap()
    }

    pub fn modify_commission(delegatee: Actor, commission: Decimal) -> Self {
        ModifyCommissionTx::new(delegatee, commission).wrap()
    }

    pub fn kind(&self) -> TxKind {
        match self {
            Self::Bond(_) => TxKind::Bond,
            Self::Unbond(_) => TxKind::Unbond,
            Self::Nominate(_) => TxKind::Nominate,
            Self::ModifyCommission(_) => TxKind::ModifyCommission,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    pub fn wire_byte(&self) -> u8 {
        self.kind().byte()
    }

    /// The validator this transaction refers to (delegatee or nominee).
    pub fn actor(&self) -> &Actor {
        match self {
            Self::Bond(tx) => &tx.0.delegatee,
            Self::Unbond(tx) => &tx.0.delegatee,
            Self::Nominate(tx) => &tx.nominee,
            Self::ModifyCommission(tx) => &tx.delegatee,
        }
    }

    pub fn amount(&self) -> Option<&Coin> {
        match self {
            Self::Bond(tx) => Some(&tx.0.amount),
            Self::Unbond(tx) => Some(&tx.0.amount),
            Self::Nominate(tx) => Some(&tx.amount),
            Self::ModifyCommission(_) => None,
        }
    }

    pub fn commission(&self) -> Option<Decimal> {
        match self {
            Self::Nominate(tx) => Some(tx.commission),
            Self::ModifyCommission(tx) => Some(tx.commission),
            Self::Bond(_) | Self::Unbond(_) => None,
        }
    }

    /// Structural validation; see [`validation`].
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        validation::validate_transaction(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v1() -> Actor {
        Actor::from_address(b"V1".to_vec())
    }

    #[test]
    fn constructors_never_validate() {
        let tx = Transaction::unbond(Actor::default(), Coin::new(-5, "x"));
        assert_eq!(tx.kind(), TxKind::Unbond);
        assert!(tx.validate_basic().is_err());
    }

    #[test]
    fn accessors_follow_variant_fields() {
        let bond = Transaction::bond(v1(), Coin::new(100, "STAKE"));
        assert_eq!(bond.actor(), &v1());
        assert_eq!(bond.amount(), Some(&Coin::new(100, "STAKE")));
        assert_eq!(bond.commission(), None);
        assert_eq!(bond.wire_byte(), 0x55);

        let modify = Transaction::modify_commission(v1(), Decimal::new(5, 2));
        assert_eq!(modify.amount(), None);
        assert_eq!(modify.commission(), Some(Decimal::new(5, 2)));
        assert_eq!(modify.tag(), "stake/modComm");
    }

    #[test]
    fn inner_consts_match_kind() {
        assert_eq!(BondTx::TAG, "stake/bond");
        assert_eq!(UnbondTx::BYTE, 0x56);
        assert_eq!(NominateTx::TAG, TxKind::Nominate.tag());
        assert_eq!(ModifyCommissionTx::BYTE, TxKind::ModifyCommission.byte());
    }

    #[test]
    fn serde_tag_matches_kind_tag() {
        let txs = [
            Transaction::bond(v1(), Coin::new(1, "STAKE")),
            Transaction::unbond(v1(), Coin::new(1, "STAKE")),
            Transaction::nominate(v1(), Coin::new(1, "STAKE"), Decimal::new(1, 1)),
            Transaction::modify_commission(v1(), Decimal::new(1, 1)),
        ];
        for tx in txs {
            let value = serde_json::to_value(&tx).unwrap();
            assert_eq!(value["type"], tx.tag());
        }
    }
}
