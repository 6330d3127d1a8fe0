use crate::types::errors::ConfigError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Factor applied to a group's median amount to obtain its split threshold.
///
/// A row is classified "high" when `booking_amount > multiplier * median`.
/// Two values are exercised in practice: [`ThresholdMultiplier::SPLIT_LOW`]
/// separates small outliers (fees, partial refunds) from the bulk of a
/// series, [`ThresholdMultiplier::SPLIT_HIGH`] separates large one-off
/// payments from a small recurring amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ThresholdMultiplier(Decimal);

impl ThresholdMultiplier {
    /// 0.3
    pub const SPLIT_LOW: ThresholdMultiplier = ThresholdMultiplier(Decimal::from_parts(3, 0, 0, false, 1));
    /// 2.0
    pub const SPLIT_HIGH: ThresholdMultiplier = ThresholdMultiplier(Decimal::TWO);

    pub fn new(value: Decimal) -> Result<Self, ConfigError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ConfigError::NegativeMultiplier(value.to_string()));
        }

        Ok(ThresholdMultiplier(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Threshold for a group with the given median amount, `None` on
    /// overflow.
    pub fn threshold(&self, median: Decimal) -> Option<Decimal> {
        self.0.checked_mul(median)
    }
}

impl Default for ThresholdMultiplier {
    fn default() -> Self {
        Self::SPLIT_LOW
    }
}

impl Display for ThresholdMultiplier {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for ThresholdMultiplier {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ConfigError::InvalidMultiplier("Value is an empty string".to_string()));
        }

        let parsed = Decimal::from_str(value)
            .map_err(|error| ConfigError::InvalidMultiplier(format!("{value}: {error}")))?;

        ThresholdMultiplier::new(parsed)
    }
}
