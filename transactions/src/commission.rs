//! Validator commission changes.

use serde::{Deserialize, Serialize};
use stake_types::{Actor, Decimal};

use crate::error::TransactionError;
use crate::kind::TxKind;
use crate::validation::{validate_actor, validate_commission};
use crate::{Transaction, TxInner};

/// Set the commission rate of the validator `delegatee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModifyCommissionTx {
    pub delegatee: Actor,
    pub commission: Decimal,
}

impl ModifyCommissionTx {
    pub fn new(delegatee: Actor, commission: Decimal) -> Self {
        Self {
            delegatee,
            commission,
        }
    }
}

impl TxInner for ModifyCommissionTx {
    const KIND: TxKind = TxKind::ModifyCommission;

    fn validate_basic(&self) -> Result<(), TransactionError> {
        validate_actor(&self.delegatee)?;
        validate_commission(self.commission)
    }
}

impl From<ModifyCommissionTx> for Transaction {
    fn from(tx: ModifyCommissionTx) -> Self {
        Transaction::ModifyCommission(tx)
    }
}
