//! Validator self-nomination.

use serde::{Deserialize, Serialize};
use stake_types::{Actor, Coin, Decimal};

use crate::error::TransactionError;
use crate::kind::TxKind;
use crate::validation::{validate_actor, validate_amount, validate_commission};
use crate::{Transaction, TxInner};

/// Register `nominee` as a validator candidate, self-bonding `amount` and
/// charging `commission` on delegator rewards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NominateTx {
    pub nominee: Actor,
    pub amount: Coin,
    pub commission: Decimal,
}

impl NominateTx {
    pub fn new(nominee: Actor, amount: Coin, commission: Decimal) -> Self {
        Self {
            nominee,
            amount,
            commission,
        }
    }
}

impl TxInner for NominateTx {
    const KIND: TxKind = TxKind::Nominate;

    fn validate_basic(&self) -> Result<(), TransactionError> {
        validate_actor(&self.nominee)?;
        validate_amount(&self.amount)?;
        validate_commission(self.commission)
    }
}

impl From<NominateTx> for Transaction {
    fn from(tx: NominateTx) -> Self {
        Transaction::Nominate(tx)
    }
}
