use bigdecimal::{BigDecimal, ToPrimitive};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of minor units (cents) per major unit.
const SCALE: i64 = 100;

/// Any nonzero value of `10^19` units or more is past `i64::MAX` cents.
const MAX_UNIT_POWER: i64 = 19;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,
    #[error("not a decimal number: {0}")]
    Invalid(String),
    #[error("amount overflow")]
    Overflow,
}

/// A signed monetary amount stored in cents.
///
/// Balances and running totals share this unit, so every ledger operation is
/// exact integer arithmetic. Text input goes through `BigDecimal` and is
/// rounded to the nearest cent.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount: Money = "150.5".parse().unwrap();
/// assert_eq!(amount.as_cents(), 15050);
/// assert_eq!(amount.to_string(), "150.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole units, e.g. `Money::from_units(100)` is `100.00`.
    pub const fn from_units(units: i64) -> Self {
        Money(units * SCALE)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub fn as_cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let bd: BigDecimal = t.parse().map_err(|e: bigdecimal::ParseBigDecimalError| {
            MoneyParseError::Invalid(e.to_string())
        })?;

        // Scaling `1e2000000000` would expand all its digits, so the
        // magnitude is checked on the (digits, exponent) pair first.
        let (digits, exponent) = bd.as_bigint_and_exponent();
        if digits.bits() == 0 {
            return Ok(Money::zero());
        }
        if exponent <= -MAX_UNIT_POWER {
            return Err(MoneyParseError::Overflow);
        }

        let cents = (bd * BigDecimal::from(SCALE)).round(0);
        let value = cents.to_i64().ok_or(MoneyParseError::Overflow)?;
        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(f, "{sign}{}.{:02}", abs / scale, abs % scale)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}
