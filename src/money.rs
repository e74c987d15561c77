//! Dinero de punto fijo con dos decimales.
//!
//! Los montos se guardan en centavos (`i64`), asi las restas no arrastran
//! errores de punto flotante: 0.60 - 0.30 da exactamente 0.30.
use std::{
    fmt,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use crate::errors::MoneyParseError;

const CENTS_PER_UNIT: i64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Money {
        Money(cents)
    }

    pub const fn zero() -> Money {
        Money(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Interpreta montos como `1`, `0.5` o `0.35`. No acepta signo ni mas de dos decimales.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let (units, decimals, has_point) = match text.split_once('.') {
            Some((units, decimals)) => (units, decimals, true),
            None => (text, "", false),
        };
        let only_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        let empty_fraction = has_point && decimals.is_empty();
        if units.is_empty() || empty_fraction || !only_digits(units) || !only_digits(decimals) {
            return Err(MoneyParseError::InvalidFormat(text.to_string()));
        }
        if decimals.len() > 2 {
            return Err(MoneyParseError::TooManyDecimals(text.to_string()));
        }

        let overflow = || MoneyParseError::Overflow(text.to_string());
        let units: i64 = units.parse().map_err(|_| overflow())?;
        let decimal_cents = match decimals.len() {
            0 => 0,
            1 => decimals.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => decimals.parse::<i64>().map_err(|_| overflow())?,
        };
        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|cents| cents.checked_add(decimal_cents))
            .map(Money)
            .ok_or_else(overflow)
    }
}

/// Muestra el monto con la menor cantidad de digitos: `0.6`, `0.05`, `4.2`, `0`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let absolute = self.0.unsigned_abs();
        let units = absolute / CENTS_PER_UNIT as u64;
        let cents = absolute % CENTS_PER_UNIT as u64;
        if cents == 0 {
            write!(f, "{}{}", sign, units)
        } else if cents % 10 == 0 {
            write!(f, "{}{}.{}", sign, units, cents / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, units, cents)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}
