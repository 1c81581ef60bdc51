use crate::types::errors::AmountError;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A non-negative, finite real.
///
/// Construction is the only place the value is checked, so holding an `Amount`
/// is proof it is finite and `>= 0`. The input is kept bit-for-bit otherwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn to_f64(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value));
        }

        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }

        // abs() drops the sign bit of a negative zero
        Ok(Amount(value.abs()))
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
