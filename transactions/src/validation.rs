//! Stateless structural validation of stake transactions.
//!
//! These checks never consult ledger state. Whether the delegator can afford
//! the bond or the validator exists is decided when the transaction executes.
//! Check order is fixed: the actor is checked before the amount, and the
//! amount before the commission, so the first failing check is the one
//! reported.

use stake_types::{Actor, Coin, Coins, Decimal};

use crate::error::TransactionError;
use crate::{Transaction, TxInner};

/// Lowest accepted commission rate, `0.0`.
pub const MIN_COMMISSION: Decimal = Decimal::new(0, 1);

/// Highest accepted commission rate, `1.0`.
pub const MAX_COMMISSION: Decimal = Decimal::new(10, 1);

/// Validate any stake transaction.
pub fn validate_transaction(tx: &Transaction) -> Result<(), TransactionError> {
    match tx {
        Transaction::Bond(bond) => bond.0.validate_basic(),
        Transaction::Unbond(unbond) => unbond.0.validate_basic(),
        Transaction::Nominate(nominate) => nominate.validate_basic(),
        Transaction::ModifyCommission(modify) => modify.validate_basic(),
    }
}

/// The referenced validator must be set.
pub fn validate_actor(actor: &Actor) -> Result<(), TransactionError> {
    if actor.is_empty() {
        return Err(TransactionError::ValidatorEmpty);
    }
    Ok(())
}

/// The amount must have a well-formed denomination and must not be negative.
pub fn validate_amount(amount: &Coin) -> Result<(), TransactionError> {
    let coins = Coins::from(amount.clone());
    if !coins.is_valid() || !coins.is_nonnegative() {
        return Err(TransactionError::InvalidCoins {
            coins: coins.to_string(),
        });
    }
    Ok(())
}

/// The commission must lie in the closed interval `[0.0, 1.0]`.
pub fn validate_commission(commission: Decimal) -> Result<(), TransactionError> {
    if commission < MIN_COMMISSION {
        return Err(TransactionError::CommissionNegative { commission });
    }
    if commission > MAX_COMMISSION {
        return Err(TransactionError::CommissionHuge { commission });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Actor {
        Actor::from_address(b"V1".to_vec())
    }

    #[test]
    fn test_validate_actor_empty() {
        let result = validate_actor(&Actor::default());
        assert!(matches!(result, Err(TransactionError::ValidatorEmpty)));
        assert!(validate_actor(&validator()).is_ok());
    }

    #[test]
    fn test_validate_amount_negative() {
        let result = validate_amount(&Coin::new(-5, "STAKE"));
        assert!(matches!(
            result,
            Err(TransactionError::InvalidCoins { ref coins }) if coins == "-5STAKE"
        ));
    }

    #[test]
    fn test_validate_amount_bad_denom() {
        let result = validate_amount(&Coin::new(5, "$"));
        assert!(matches!(result, Err(TransactionError::InvalidCoins { .. })));
    }

    #[test]
    fn test_validate_amount_zero_is_accepted() {
        assert!(validate_amount(&Coin::new(0, "STAKE")).is_ok());
    }

    #[test]
    fn test_validate_commission_boundaries() {
        assert!(validate_commission(MIN_COMMISSION).is_ok());
        assert!(validate_commission(MAX_COMMISSION).is_ok());
        assert!(validate_commission(Decimal::ZERO).is_ok());
        assert!(validate_commission(Decimal::ONE).is_ok());
        assert!(validate_commission(Decimal::new(100, 2)).is_ok());
    }

    #[test]
    fn test_validate_commission_out_of_range() {
        assert!(matches!(
            validate_commission(Decimal::new(-1, 2)),
            Err(TransactionError::CommissionNegative { .. })
        ));
        assert!(matches!(
            validate_commission(Decimal::new(1_000_000_000_000_000_001, 18)),
            Err(TransactionError::CommissionHuge { .. })
        ));
        assert!(matches!(
            validate_commission(Decimal::new(15, 1)),
            Err(TransactionError::CommissionHuge { .. })
        ));
    }

    #[test]
    fn test_validate_commission_mid_range() {
        for (m, s) in [(5, 2), (33, 2), (1, 1), (999, 3)] {
            assert!(validate_commission(Decimal::new(m, s)).is_ok());
        }
    }
}
