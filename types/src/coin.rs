//! Single-denomination coin values and coin sets.
//!
//! Amounts are signed so that a malformed (negative) value can be carried
//! through to validation and rejected there, rather than being unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

/// Whether `denom` is a structurally well-formed denomination.
///
/// 3 to 128 ASCII characters, starting with a letter, followed by letters,
/// digits or one of `/ : . _ -`.
pub fn is_valid_denom(denom: &str) -> bool {
    let bytes = denom.as_bytes();
    if bytes.len() < MIN_DENOM_LEN || bytes.len() > MAX_DENOM_LEN {
        return false;
    }
    bytes[0].is_ascii_alphabetic()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-'))
}

/// An amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: i64,
}

impl Coin {
    pub fn new(amount: i64, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_denom(&self.denom)
    }

    pub fn is_nonnegative(&self) -> bool {
        self.amount >= 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = TypesError;

    /// Parses `"<amount><denom>"`, e.g. `100STAKE` or `-5STAKE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TypesError::InvalidCoin {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let digits_start = usize::from(trimmed.starts_with('-'));
        let split = trimmed[digits_start..]
            .find(|c: char| !c.is_ascii_digit())
            .map(|i| i + digits_start)
            .ok_or_else(|| invalid("missing denomination"))?;
        if split == digits_start {
            return Err(invalid("missing amount"));
        }

        let (amount, denom) = trimmed.split_at(split);
        let amount = amount
            .parse::<i64>()
            .map_err(|e| invalid(&e.to_string()))?;
        if !is_valid_denom(denom) {
            return Err(invalid("malformed denomination"));
        }
        Ok(Self::new(amount, denom))
    }
}

/// A set of coins, one entry per denomination, sorted by denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    pub fn as_slice(&self) -> &[Coin] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every denomination is well-formed and denominations are strictly
    /// ascending. The empty set is valid.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Coin::is_valid)
            && self.0.windows(2).all(|pair| pair[0].denom < pair[1].denom)
    }

    pub fn is_nonnegative(&self) -> bool {
        self.0.iter().all(Coin::is_nonnegative)
    }

    pub fn amount_of(&self, denom: &str) -> i64 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map_or(0, |c| c.amount)
    }

    /// Merge two sorted sets, summing per denomination and dropping zero
    /// results. Returns `None` on overflow.
    pub fn checked_add(&self, other: &Coins) -> Option<Coins> {
        let mut out = Vec::with_capacity(self.len() + other.len());
        let (mut a, mut b) = (self.0.iter().peekable(), other.0.iter().peekable());
        loop {
            let next = match (a.peek(), b.peek()) {
                (None, None) => break,
                (Some(_), None) => a.next().cloned(),
                (None, Some(_)) => b.next().cloned(),
                (Some(x), Some(y)) => match x.denom.cmp(&y.denom) {
                    std::cmp::Ordering::Less => a.next().cloned(),
                    std::cmp::Ordering::Greater => b.next().cloned(),
                    std::cmp::Ordering::Equal => {
                        let amount = x.amount.checked_add(y.amount)?;
                        let coin = Coin::new(amount, x.denom.clone());
                        a.next();
                        b.next();
                        Some(coin)
                    }
                },
            };
            if let Some(coin) = next.filter(|c| !c.is_zero()) {
                out.push(coin);
            }
        }
        Some(Coins(out))
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self(vec![coin])
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}
