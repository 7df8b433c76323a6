//! Prices in minor currency units.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Non-negative amount in minor currency units (e.g. cents).
///
/// Deserializes from any JSON integer; negative amounts are rejected so a
/// malformed record never reaches classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub const ZERO: Self = Self(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whole major units (dollars) and the remaining minor units (cents).
    pub const fn split(self) -> (u64, u64) {
        (self.0 / 100, self.0 % 100)
    }
}

impl ValueObject for MinorUnits {}

impl From<u64> for MinorUnits {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<MinorUnits> for u64 {
    fn from(value: MinorUnits) -> Self {
        value.0
    }
}

impl TryFrom<i64> for MinorUnits {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("amount must be >= 0 (got {value})")))
    }
}
