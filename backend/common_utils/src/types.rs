//! Amount types shared by the gateway wire format and the checkout side

use std::{fmt::Display, iter::Sum, ops::Add};

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use utoipa::ToSchema;

use crate::errors::{CustomResult, ParsingError};

/// Minor units per major unit. Every currency the gateway settles in is a
/// two-decimal currency.
const MINOR_UNITS_PER_MAJOR_UNIT: i64 = 100;

/// Amount in the smallest denomination of its currency (e.g. cents)
#[derive(
    Default,
    Debug,
    serde::Deserialize,
    serde::Serialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    ToSchema,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// forms a new minor default unit i.e zero
    pub fn zero() -> Self {
        Self(0)
    }

    /// gets amount as i64 value
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for MinorUnit {
    type Output = Self;
    fn add(self, a2: Self) -> Self {
        Self(self.0 + a2.0)
    }
}

impl Sum for MinorUnit {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |a, b| a + b)
    }
}

/// Amount in major units as a decimal number, the representation checkout
/// totals arrive in
#[derive(Default, Debug, serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq)]
pub struct FloatMajorUnit(f64);

impl FloatMajorUnit {
    /// forms a new major unit from amount
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// forms a new major unit with zero amount
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Converts the major-unit amount to its minor-unit count. Goes through
    /// [`Decimal`] so no float arithmetic touches the amount.
    pub fn to_minor_unit_as_i64(self) -> CustomResult<MinorUnit, ParsingError> {
        let amount_decimal =
            Decimal::from_f64(self.0).ok_or(ParsingError::FloatToDecimalConversionFailure)?;

        let amount = amount_decimal * Decimal::from(MINOR_UNITS_PER_MAJOR_UNIT);
        let amount_i64 = amount
            .to_i64()
            .ok_or(ParsingError::DecimalToI64ConversionFailure)?;
        Ok(MinorUnit::new(amount_i64))
    }
}
