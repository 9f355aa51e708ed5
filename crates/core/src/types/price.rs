//! Money amounts using decimal arithmetic.
//!
//! Cart totals are computed with [`Decimal`] so that summing many line prices
//! never accumulates binary floating point error. On the wire an amount is a
//! plain JSON number, matching the persisted cart schema.
//!
//! Every amount is held to the cent and lies within `-MAX..=MAX`. Fifteen
//! significant digits survive a trip through `f64` unchanged, so a persisted
//! price reads back as the amount that was written. Arithmetic saturates at
//! the bounds instead of overflowing.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

/// A non-currency-tagged money amount in the store's standard unit
/// (e.g., dollars, not cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Money(#[serde(serialize_with = "rust_decimal::serde::float::serialize")] Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest amount, $9,999,999,999,999.99.
    pub const MAX: Self = Self(Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2));

    /// The smallest amount, the negation of [`Money::MAX`].
    pub const MIN: Self = Self(Decimal::from_parts(2_764_472_319, 232_830, 0, true, 2));

    /// Create a money amount from a decimal, rounded half away from zero to
    /// the cent and clamped to `MIN..=MAX`.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use tidecart_core::Money;
    ///
    /// assert_eq!(Money::new(Decimal::new(12_345, 3)), Money::from_cents(1235));
    /// assert_eq!(Money::new(Decimal::MAX), Money::MAX);
    /// ```
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self(cents.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Create a money amount from an integer number of cents.
    ///
    /// ```
    /// use tidecart_core::Money;
    ///
    /// assert_eq!(Money::from_cents(1999).to_string(), "$19.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiply a unit price by a quantity, saturating at the bounds.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map_or_else(|| self.saturated(), Self::new)
    }

    const fn saturated(self) -> Self {
        if self.0.is_sign_negative() {
            Self::MIN
        } else {
            Self::MAX
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${:.2}", self.0.abs())
        } else {
            write!(f, "${:.2}", self.0)
        }
    }
}

/// Parses `12.5`, `$12.50` and the like. Sub-cent digits are rounded, but an
/// amount beyond [`Money::MAX`] is an error rather than being clamped.
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim().trim_start_matches('$'))?;
        if amount.abs() > Self::MAX.0 {
            return Err(rust_decimal::Error::ExceedsMaximumPossibleValue);
        }
        Ok(Self::new(amount))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self::new)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<u32> for Money {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.0
            .checked_add(rhs.0)
            .map_or_else(|| rhs.saturated(), Self::new)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
