use proptest::prelude::*;

use stake_transactions::codec::{decode_frame, encode_frame};
use stake_transactions::{Transaction, TransactionError, TxMapper};
use stake_types::{Actor, Coin, Decimal};

fn non_empty_actor() -> impl Strategy<Value = Actor> {
    prop::collection::vec(any::<u8>(), 1..32).prop_map(|bytes| Actor::from_address(bytes))
}

fn denom() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{2,15}"
}

fn decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=40).prop_map(|(m, s)| Decimal::new(m, s))
}

proptest! {
    /// Any well-formed, non-negative amount bonded to a non-empty delegatee validates.
    #[test]
    fn bonding_accepts_nonnegative(
        delegatee in non_empty_actor(),
        amount in 0i64..=i64::MAX,
        denom in denom(),
    ) {
        let coin = Coin::new(amount, denom);
        prop_assert_eq!(Transaction::bond(delegatee.clone(), coin.clone()).validate_basic(), Ok(()));
        prop_assert_eq!(Transaction::unbond(delegatee, coin).validate_basic(), Ok(()));
    }

    /// An empty delegatee is reported regardless of the amount.
    #[test]
    fn bonding_rejects_empty_delegatee(amount in any::<i64>(), denom in "[ -~]{0,8}") {
        let tx = Transaction::bond(Actor::default(), Coin::new(amount, denom));
        prop_assert_eq!(tx.validate_basic(), Err(TransactionError::ValidatorEmpty));
    }

    /// Negative amounts with a valid denomination fail as invalid coins.
    #[test]
    fn bonding_rejects_negative(
        delegatee in non_empty_actor(),
        amount in i64::MIN..0,
        denom in denom(),
    ) {
        let tx = Transaction::unbond(delegatee, Coin::new(amount, denom));
        let is_invalid_coins = matches!(tx.validate_basic(), Err(TransactionError::InvalidCoins { .. }));
        prop_assert!(is_invalid_coins);
    }

    /// Nomination succeeds iff 0.0 <= commission <= 1.0.
    #[test]
    fn nominate_commission_interval(nominee in non_empty_actor(), amount in 0i64..1_000_000, commission in decimal()) {
        let tx = Transaction::nominate(nominee, Coin::new(amount, "STAKE"), commission);
        let in_range = commission >= Decimal::ZERO && commission <= Decimal::ONE;
        prop_assert_eq!(tx.validate_basic().is_ok(), in_range);
    }

    /// Commission changes reject exactly the out-of-range rates, with the matching error.
    #[test]
    fn modify_commission_errors(delegatee in non_empty_actor(), commission in decimal()) {
        let result = Transaction::modify_commission(delegatee, commission).validate_basic();
        if commission.is_negative() {
            let is_negative_error = matches!(result, Err(TransactionError::CommissionNegative { .. }));
            prop_assert!(is_negative_error);
        } else if commission > Decimal::ONE {
            let is_huge_error = matches!(result, Err(TransactionError::CommissionHuge { .. }));
            prop_assert!(is_huge_error);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Frames decode to the same variant with field-for-field equal values.
    #[test]
    fn frame_roundtrip(
        actor in non_empty_actor(),
        amount in any::<i64>(),
        commission in decimal(),
        variant in 0u8..4,
    ) {
        let coin = Coin::new(amount, "STAKE");
        let tx = match variant {
            0 => Transaction::bond(actor, coin),
            1 => Transaction::unbond(actor, coin),
            2 => Transaction::nominate(actor, coin, commission),
            _ => Transaction::modify_commission(actor, commission),
        };
        let mapper = TxMapper::with_stake_types();
        let decoded = decode_frame(&mapper, &encode_frame(&tx).unwrap()).unwrap();
        prop_assert_eq!(decoded.wire_byte(), tx.wire_byte());
        if let (Some(a), Some(b)) = (decoded.commission(), tx.commission()) {
            prop_assert_eq!((a.mantissa(), a.scale()), (b.mantissa(), b.scale()));
        }
        prop_assert_eq!(decoded, tx);
    }
}
