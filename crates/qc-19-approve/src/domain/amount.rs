//! # Signed Amount
//!
//! Fixed-width signed quantity. Arithmetic is checked; an overflow is an
//! input error, never a wrap.

use crate::domain::errors::ApproveError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Signed asset quantity, serialized as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i128);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(value: i128) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i128 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Amount) -> Result<Amount, ApproveError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(ApproveError::AmountOverflow)
    }

    pub fn checked_sub(self, other: Amount) -> Result<Amount, ApproveError> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or(ApproveError::AmountOverflow)
    }

    pub fn checked_neg(self) -> Result<Amount, ApproveError> {
        self.0
            .checked_neg()
            .map(Amount)
            .ok_or(ApproveError::AmountOverflow)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(i128::from(value))
    }
}

impl From<i128> for Amount {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ApproveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i128>()
            .map(Amount)
            .map_err(|_| ApproveError::InvalidAmount(s.to_string()))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
