//! Bond and unbond transactions.

use serde::{Deserialize, Serialize};
use stake_types::{Actor, Coin};

use crate::error::TransactionError;
use crate::kind::TxKind;
use crate::validation::{validate_actor, validate_amount};
use crate::{Transaction, TxInner};

/// Fields shared by bonding and unbonding: who the stake is delegated to,
/// and how much.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondingTx {
    pub delegatee: Actor,
    pub amount: Coin,
}

impl BondingTx {
    pub fn new(delegatee: Actor, amount: Coin) -> Self {
        Self { delegatee, amount }
    }

    /// The delegatee is set and the amount is a valid, non-negative coin.
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        validate_actor(&self.delegatee)?;
        validate_amount(&self.amount)
    }
}

/// Delegate `amount` to `delegatee`, increasing its stake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondTx(pub BondingTx);

/// Release `amount` previously delegated to `delegatee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnbondTx(pub BondingTx);

impl TxInner for BondTx {
    const KIND: TxKind = TxKind::Bond;

    fn validate_basic(&self) -> Result<(), TransactionError> {
        self.0.validate_basic()
    }
}

impl TxInner for UnbondTx {
    const KIND: TxKind = TxKind::Unbond;

    fn validate_basic(&self) -> Result<(), TransactionError> {
        self.0.validate_basic()
    }
}

impl From<BondTx> for Transaction {
    fn from(tx: BondTx) -> Self {
        Transaction::Bond(tx)
    }
}

impl From<UnbondTx> for Transaction {
    fn from(tx: UnbondTx) -> Self {
        Transaction::Unbond(tx)
    }
}
