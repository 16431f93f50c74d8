//! # Core Domain Entities
//!
//! Typed addresses shared by the staking, distribution and approve subsystems.
//!
//! ## Address Kinds
//!
//! - **AccAddress**: an ordinary account (delegators, allowance parties)
//! - **ValAddress**: a validator operator
//! - **ConsAddress**: a validator's consensus key
//!
//! All three are exactly [`ADDR_LEN`] raw bytes. They are structurally
//! identical but deliberately distinct types: there is no conversion between
//! them, so a delegator address can never be written into a validator slot
//! of a key by accident.

use crate::errors::AddressError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Width in bytes of every address kind.
pub const ADDR_LEN: usize = 20;

/// Human-readable prefix of an address string.
pub const ADDRESS_TEXT_PREFIX: &str = "0x";

macro_rules! define_address {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name([u8; ADDR_LEN]);

        impl $name {
            /// Human-readable name of this address kind.
            pub const KIND: &'static str = $kind;

            /// Wrap raw address bytes.
            pub const fn new(bytes: [u8; ADDR_LEN]) -> Self {
                Self(bytes)
            }

            /// Build an address from a slice of exactly [`ADDR_LEN`] bytes.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
                let raw: [u8; ADDR_LEN] =
                    bytes.try_into().map_err(|_| AddressError::InvalidLength {
                        kind: Self::KIND,
                        expected: ADDR_LEN,
                        actual: bytes.len(),
                    })?;
                Ok(Self(raw))
            }

            /// Raw address bytes.
            pub fn as_bytes(&self) -> &[u8; ADDR_LEN] {
                &self.0
            }

            /// Owned copy of the raw bytes.
            pub fn to_bytes(self) -> [u8; ADDR_LEN] {
                self.0
            }

            /// The all-zero address stands for "unset".
            pub fn is_empty(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; ADDR_LEN]> for $name {
            fn from(bytes: [u8; ADDR_LEN]) -> Self {
                Self(bytes)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", ADDRESS_TEXT_PREFIX, hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl FromStr for $name {
            type Err = AddressError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix(ADDRESS_TEXT_PREFIX).unwrap_or(s);
                let bytes = hex::decode(digits).map_err(|_| AddressError::InvalidText {
                    kind: Self::KIND,
                    text: s.to_string(),
                })?;
                Self::from_slice(&bytes)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

define_address!(
    /// Address of an ordinary account.
    AccAddress,
    "account"
);

define_address!(
    /// Operator address of a validator.
    ValAddress,
    "validator"
);

define_address!(
    /// Consensus-key address of a validator.
    ConsAddress,
    "consensus"
);
