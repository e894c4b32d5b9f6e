use crate::utils::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

const CENTS_PER_UNIT: i64 = 100;

/// A currency amount held as integer cents.
///
/// Prices are parsed from decimal text and never pass through `f64`, so
/// `19.99 * 3` is exactly `59.97`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "String")]
pub struct Money(i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Text(String),
    Whole(i64),
}

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Price of `quantity` units at this unit price, saturating at the
    /// `i64` cent limits.
    pub fn times(self, quantity: i32) -> Self {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    pub fn checked_times(self, quantity: i32) -> Option<Self> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl FromStr for Money {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| StoreError::InvalidMoney {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if digits.contains('.') && fraction.is_empty() {
            return Err(invalid("expected digits after the decimal point"));
        }
        if fraction.len() > 2 {
            return Err(invalid("more than two fractional digits"));
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("fractional part must be digits"));
        }

        let units: i64 = whole
            .parse()
            .map_err(|_| invalid("amount is out of range"))?;
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let cents = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(|| invalid("amount is out of range"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl TryFrom<MoneyRepr> for Money {
    type Error = StoreError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        match repr {
            MoneyRepr::Text(text) => text.parse(),
            MoneyRepr::Whole(units) => units
                .checked_mul(CENTS_PER_UNIT)
                .map(Money)
                .ok_or_else(|| StoreError::InvalidMoney {
                    value: units.to_string(),
                    reason: "amount is out of range".to_string(),
                }),
        }
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let text = format!(
            "{}{}.{:02}",
            sign,
            abs / CENTS_PER_UNIT as u64,
            abs % CENTS_PER_UNIT as u64
        );
        f.pad(&text)
    }
}

/// Saturates at the `i64` cent limits; use [`Money::checked_add`] to detect overflow.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<i32> for Money {
    type Output = Money;

    fn mul(self, quantity: i32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("19.99".parse::<Money>().unwrap(), Money::from_cents(1999));
        assert_eq!("5".parse::<Money>().unwrap(), Money::from_cents(500));
        assert_eq!("5.5".parse::<Money>().unwrap(), Money::from_cents(550));
        assert_eq!("-0.07".parse::<Money>().unwrap(), Money::from_cents(-7));
        assert_eq!(Money::from_cents(6497).to_string(), "64.97");
        assert_eq!(Money::from_cents(-7).to_string(), "-0.07");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_rejects_malformed_amounts() {
        for bad in ["", "abc", "1.234", "1.", ".5", "1.2x", "--1", "99999999999999999999"] {
            assert!(bad.parse::<Money>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_multiplication_is_exact() {
        let price: Money = "19.99".parse().unwrap();
        assert_eq!(price * 3, Money::from_cents(5997));
        assert_eq!(price.times(0), Money::zero());
        assert_eq!(price.times(-1), Money::from_cents(-1999));
    }

    #[test]
    fn test_parse_at_i64_limits() {
        assert_eq!(
            "92233720368547758.07".parse::<Money>().unwrap(),
            Money::from_cents(i64::MAX)
        );
        assert!("92233720368547758.08".parse::<Money>().is_err());
        assert!("92233720368547759".parse::<Money>().is_err());
        assert_eq!(
            "-92233720368547758.07".parse::<Money>().unwrap(),
            Money::from_cents(-i64::MAX)
        );
    }

    #[test]
    fn test_overflowing_arithmetic() {
        let big = Money::from_cents(i64::MAX / 2 + 1);

        assert_eq!(big.checked_times(2), None);
        assert_eq!(big.times(2), Money::from_cents(i64::MAX));
        assert_eq!(Money::from_cents(i64::MIN / 2 - 1).times(2), Money::from_cents(i64::MIN));
        assert_eq!(
            Money::from_cents(100).checked_times(i32::MAX),
            Some(Money::from_cents(100 * i64::from(i32::MAX)))
        );

        assert_eq!(big.checked_add(big), None);
        assert_eq!(big + big, Money::from_cents(i64::MAX));
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );

        let total: Money = [big, big, Money::from_cents(-5)].into_iter().sum();
        assert_eq!(total, Money::from_cents(i64::MAX - 5));
    }

    #[test]
    fn test_serde_accepts_text_and_whole_units() {
        #[derive(Deserialize)]
        struct Priced {
            price: Money,
        }

        let text: Priced = serde_json::from_str(r#"{"price": "48.95"}"#).unwrap();
        assert_eq!(text.price, Money::from_cents(4895));

        let whole: Priced = serde_json::from_str(r#"{"price": 275}"#).unwrap();
        assert_eq!(whole.price, Money::from_cents(27500));

        assert!(serde_json::from_str::<Priced>(r#"{"price": "1.999"}"#).is_err());
        assert_eq!(
            serde_json::to_string(&Money::from_cents(1950)).unwrap(),
            r#""19.50""#
        );
    }
}
