use crate::types::errors::MonetaryError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: u32 = 2;

/// A sales amount held at cent precision.
///
/// Every constructor rounds half-up (`MidpointAwayFromZero`) to two decimal places, so
/// `Display` always renders exactly two fractional digits and no currency symbol.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new() -> Self {
        Monetary(Decimal::new(0, DECIMAL_PLACES))
    }

    /// Revenue for a single sale line: `price * quantity` rounded to cents.
    pub fn from_sale(price: Decimal, quantity: Decimal) -> Result<Self, MonetaryError> {
        let sales = price.checked_mul(quantity).ok_or(MonetaryError::Overflow)?;

        Monetary::rounded(sales)
    }

    /// `None` when the sum cannot be held at cent precision.
    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).and_then(|sum| Monetary::rounded(sum).ok())
    }

    /// Lossy conversion for plotting. `None` when the amount has no `f64` form.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64().filter(|value| value.is_finite())
    }

    fn rounded(value: Decimal) -> Result<Self, MonetaryError> {
        let mut value = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DECIMAL_PLACES);

        // rescale stops short when the mantissa has no room for the extra digits
        if value.scale() != DECIMAL_PLACES {
            return Err(MonetaryError::Overflow);
        }

        Ok(Monetary(value))
    }
}

/// Parses a currency-formatted amount such as `"$1,234.50"`.
///
/// Every `$` and `,` is removed before parsing. The remainder must be a non-negative number.
pub fn parse_amount(value: &str) -> Result<Decimal, MonetaryError> {
    let cleaned: String = value.trim()
        .chars()
        .filter(|character| !matches!(character, '$' | ','))
        .collect();

    parse_number(&cleaned)
}

/// Parses a plain non-negative number, accepting scientific notation as a fallback.
pub fn parse_number(value: &str) -> Result<Decimal, MonetaryError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
    }

    let parsed = match Decimal::from_str(value) {
        Ok(parsed) => parsed,
        Err(_) => Decimal::from_scientific(value)?
    };

    if parsed.is_sign_negative() && !parsed.is_zero() {
        return Err(MonetaryError::Negative(value.to_string()));
    }

    Ok(parsed.abs())
}

impl Default for Monetary {
    fn default() -> Self {
        Monetary::new()
    }
}

impl AddAssign<Monetary> for Monetary {
    fn add_assign(&mut self, rhs: Monetary) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Monetary AddAssign error: Overflow")
        }
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_amount(value).and_then(Monetary::rounded)
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
