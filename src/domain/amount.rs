use crate::error::AccountError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A caller-supplied monetary amount that is known to be a finite number.
///
/// Typed callers hand over a `Decimal` or an integer and can never fail the
/// numeric check. Text and floating point values come from the outside world
/// and are checked at conversion time: anything that does not parse, and any
/// non-finite float, becomes [`AccountError::InvalidInput`].
///
/// The sign is preserved. Whether a negative amount is acceptable is decided
/// by the operation that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn magnitude(&self) -> Decimal {
        self.0.abs()
    }
}

/// Whether a textual boundary value is a finite decimal number that fits in
/// a `Decimal`.
pub(crate) fn is_number(input: &str) -> bool {
    Decimal::from_str(input.trim()).is_ok()
}

impl TryFrom<Decimal> for Amount {
    type Error = AccountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Ok(Self(value))
    }
}

impl TryFrom<i64> for Amount {
    type Error = AccountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(Self(Decimal::from(value)))
    }
}

impl TryFrom<f64> for Amount {
    type Error = AccountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AccountError::InvalidInput);
        }
        Decimal::try_from(value)
            .map(Self)
            .map_err(|_| AccountError::InvalidInput)
    }
}

impl TryFrom<&str> for Amount {
    type Error = AccountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !is_number(value) {
            return Err(AccountError::InvalidInput);
        }
        Decimal::from_str(value.trim())
            .map(Self)
            .map_err(|_| AccountError::InvalidInput)
    }
}

impl TryFrom<&String> for Amount {
    type Error = AccountError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
