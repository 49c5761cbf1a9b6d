//! Exact base-10 fixed-point numbers for rates such as validator commission.
//!
//! A [`Decimal`] is `mantissa × 10^(−scale)`. There is no floating-point
//! intermediate anywhere: comparison rescales in `i128`, so `0.1`, `0.05`
//! and `1.0` compare exactly.
//!
//! Equality and ordering are numerical, not structural: `Decimal::new(10, 1)`
//! (`1.0`) equals `Decimal::new(1, 0)` (`1`). The stored scale is still kept
//! and round-trips through the text form, so `1.0` stays `1.0` on the wire.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::TypesError;

/// An exact decimal value `mantissa × 10^(−scale)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Decimal {
    mantissa: i64,
    scale: u32,
}

impl Decimal {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 0);

    /// `mantissa × 10^(−scale)`. `new(5, 2)` is `0.05`, `new(10, 1)` is `1.0`.
    pub const fn new(mantissa: i64, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    pub fn mantissa(&self) -> i64 {
        self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// Strip trailing zero digits. Numerically equal values normalise to the
    /// same `(mantissa, scale)` pair.
    pub fn normalize(&self) -> Self {
        if self.mantissa == 0 {
            return Self::ZERO;
        }
        let (mut mantissa, mut scale) = (self.mantissa, self.scale);
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    /// Integer part of `self × n`, truncated toward zero. `None` if the
    /// result does not fit in an `i64`.
    pub fn checked_mul_int(&self, n: i64) -> Option<i64> {
        let product = i128::from(self.mantissa) * i128::from(n);
        let truncated = match pow10(self.scale) {
            Some(divisor) => product / divisor,
            // |product| < 2^126 < 10^38, so any larger divisor truncates to zero.
            None => 0,
        };
        i64::try_from(truncated).ok()
    }
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

/// `mantissa × 10^by` in `i128`, or `None` if it overflows.
fn rescale(mantissa: i64, by: u32) -> Option<i128> {
    if mantissa == 0 {
        return Some(0);
    }
    pow10(by)?.checked_mul(i128::from(mantissa))
}

/// Compare `a × 10^by` against `b`. On overflow the left side's magnitude
/// exceeds every `i64`, so its sign decides.
fn cmp_rescaled(a: i64, by: u32, b: i64) -> Ordering {
    match rescale(a, by) {
        Some(scaled) => scaled.cmp(&i128::from(b)),
        None if a > 0 => Ordering::Greater,
        None => Ordering::Less,
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.mantissa.cmp(&other.mantissa),
            Ordering::Less => cmp_rescaled(self.mantissa, other.scale - self.scale, other.mantissa),
            Ordering::Greater => {
                cmp_rescaled(other.mantissa, self.scale - other.scale, self.mantissa).reverse()
            }
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normal = self.normalize();
        normal.mantissa.hash(state);
        normal.scale.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mantissa < 0 {
            f.write_str("-")?;
        }
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{int_part}.{frac_part}")
    }
}

impl FromStr for Decimal {
    type Err = TypesError;

    /// Parses `[+-]digits[.digits]`, keeping the written number of
    /// fractional digits as the scale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TypesError::InvalidDecimal {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(invalid("empty input")),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((_, "")) => return Err(invalid("missing fractional digits")),
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid("no digits"));
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("unexpected character"));
        }
        let scale = u32::try_from(frac_part.len()).map_err(|_| invalid("out of range"))?;

        let mut magnitude: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(b - b'0')))
                .ok_or_else(|| invalid("out of range"))?;
        }
        let signed = if negative { -magnitude } else { magnitude };
        let mantissa = i64::try_from(signed).map_err(|_| invalid("out of range"))?;
        Ok(Self::new(mantissa, scale))
    }
}

impl From<Decimal> for String {
    fn from(d: Decimal) -> Self {
        d.to_string()
    }
}

impl TryFrom<String> for Decimal {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn boundaries_at_one_fractional_place() {
        let zero = Decimal::new(0, 1);
        let one = Decimal::new(10, 1);
        assert_eq!(zero.to_string(), "0.0");
        assert_eq!(one.to_string(), "1.0");
        assert_eq!(zero, Decimal::ZERO);
        assert_eq!(one, Decimal::ONE);
        assert!(zero >= Decimal::ZERO);
        assert!(one <= Decimal::ONE);
    }

    #[test]
    fn new_scales_down_by_exponent() {
        assert_eq!(Decimal::new(1, 1), d("0.1"));
        assert_eq!(Decimal::new(5, 2), d("0.05"));
        assert_eq!(Decimal::new(33, 2), d("0.33"));
        assert_eq!(Decimal::new(-1, 2).to_string(), "-0.01");
        assert_eq!(Decimal::new(15, 1).to_string(), "1.5");
    }

    #[test]
    fn mid_range_values_compare_exactly() {
        let lo = Decimal::new(0, 1);
        let hi = Decimal::new(10, 1);
        for v in ["0.05", "0.33", "0.1", "0.999999999999999999", "0.000000000000000001"] {
            let v = d(v);
            assert!(v > lo, "{v} should be above 0.0");
            assert!(v < hi, "{v} should be below 1.0");
        }
        assert_eq!(d("0.30"), d("0.3"));
        assert!(d("0.33") < d("0.330000000000000001"));
        assert!(d("1.000000000000000001") > hi);
        assert!(d("-0.000000000000000001") < lo);
    }

    #[test]
    fn equality_is_numerical_and_hash_consistent() {
        assert_eq!(Decimal::new(10, 1), Decimal::new(1, 0));
        assert_eq!(Decimal::new(100, 2), Decimal::new(1, 0));
        assert_eq!(Decimal::new(0, 7), Decimal::new(0, 0));

        let set: HashSet<Decimal> = [Decimal::new(10, 1), Decimal::new(1, 0), Decimal::new(100, 2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn comparison_survives_rescale_overflow() {
        let huge_scale = Decimal::new(1, 60);
        assert!(huge_scale > Decimal::ZERO);
        assert!(huge_scale < Decimal::new(1, 59));
        assert!(Decimal::new(-1, 60) < Decimal::ZERO);
        assert!(Decimal::new(i64::MAX, 0) > Decimal::new(i64::MAX, 40));
        assert!(Decimal::new(i64::MIN, 0) < Decimal::new(i64::MIN, 40));
        assert!(Decimal::new(1, 0) > Decimal::new(i64::MAX, 40));
    }

    #[test]
    fn normalize_strips_trailing_zeros() {
        let n = Decimal::new(1500, 3).normalize();
        assert_eq!((n.mantissa(), n.scale()), (15, 1));
        let z = Decimal::new(0, 4).normalize();
        assert_eq!((z.mantissa(), z.scale()), (0, 0));
        let whole = Decimal::new(100, 0).normalize();
        assert_eq!((whole.mantissa(), whole.scale()), (100, 0));
    }

    #[test]
    fn parse_keeps_written_scale() {
        let one = d("1.0");
        assert_eq!((one.mantissa(), one.scale()), (10, 1));
        let neg = d("-0.01");
        assert_eq!((neg.mantissa(), neg.scale()), (-1, 2));
        assert_eq!(d("+2").to_string(), "2");
        assert_eq!(d(".5").to_string(), "0.5");
    }

    #[test]
    fn parse_accepts_scales_beyond_eighteen_places() {
        let tiny = d("0.0000000000000000005");
        assert_eq!((tiny.mantissa(), tiny.scale()), (5, 19));

        let long = d("0.1234567890123456789");
        assert_eq!((long.mantissa(), long.scale()), (1234567890123456789, 19));

        let deep = Decimal::new(-i64::MAX, 40);
        let back = d(&deep.to_string());
        assert_eq!((back.mantissa(), back.scale()), (-i64::MAX, 40));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for bad in ["", "-", ".", "1.", "1e3", "0x10", "1.2.3", " 1"] {
            assert!(bad.parse::<Decimal>().is_err(), "{bad:?} should not parse");
        }
        assert!("99999999999999999999".parse::<Decimal>().is_err());
        assert_eq!(d("-9223372036854775808").mantissa(), i64::MIN);
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&Decimal::new(5, 2)).unwrap();
        assert_eq!(json, r#""0.05""#);
        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!((back.mantissa(), back.scale()), (5, 2));
        assert!(serde_json::from_str::<Decimal>(r#""abc""#).is_err());
    }

    #[test]
    fn commission_share_truncates() {
        assert_eq!(Decimal::new(5, 2).checked_mul_int(1000), Some(50));
        assert_eq!(Decimal::new(33, 2).checked_mul_int(10), Some(3));
        assert_eq!(Decimal::new(-33, 2).checked_mul_int(10), Some(-3));
        assert_eq!(Decimal::new(1, 60).checked_mul_int(i64::MAX), Some(0));
        assert_eq!(Decimal::new(2, 0).checked_mul_int(i64::MAX), None);
    }
}
