//! # Domain Errors
//!
//! Error types for the staking key space.
//!
//! ## Design Principles
//!
//! - A key that fails to parse could not have been produced by this crate's
//!   builders. That is state corruption, never a user input error.
//! - Parsers return [`KeyError`] so callers decide where the state machine
//!   boundary is; at that boundary [`OrHalt::or_halt`] stops the node
//!   identically on every replica.

use thiserror::Error;

/// State corruption detected while decoding a stored key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Key length does not match the table's fixed layout.
    #[error("Corrupted {table} key: expected {expected} bytes, got {actual}")]
    InvalidLength {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Leading type tag belongs to a different table.
    #[error("Corrupted {table} key: expected type tag 0x{expected:02x}, got 0x{actual:02x}")]
    UnknownTag {
        table: &'static str,
        expected: u8,
        actual: u8,
    },

    /// Integer field is not exactly eight bytes.
    #[error("Corrupted integer field: expected 8 bytes, got {actual}")]
    InvalidInteger { actual: usize },
}

impl KeyError {
    /// Stop the state machine on corruption.
    ///
    /// Replicas must not recover locally from a key this crate could not
    /// have written, so this never returns.
    pub fn halt(self) -> ! {
        tracing::error!("[qc-18] Halting on state corruption: {}", self);
        panic!("state corruption: {}", self)
    }
}

/// Turns a corruption result into a deterministic halt.
pub trait OrHalt<T> {
    fn or_halt(self) -> T;
}

impl<T> OrHalt<T> for Result<T, KeyError> {
    fn or_halt(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => e.halt(),
        }
    }
}

/// Errors reported by an ordered key-value store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_halt_passes_values_through() {
        let ok: Result<u8, KeyError> = Ok(7);
        assert_eq!(ok.or_halt(), 7);
    }

    #[test]
    #[should_panic(expected = "state corruption")]
    fn test_or_halt_panics_on_corruption() {
        let bad: Result<u8, KeyError> = Err(KeyError::InvalidLength {
            table: "validator",
            expected: 21,
            actual: 3,
        });
        bad.or_halt();
    }

    #[test]
    fn test_messages_name_the_table() {
        let err = KeyError::UnknownTag {
            table: "delegation_by_del_val",
            expected: 0x31,
            actual: 0x32,
        };
        assert_eq!(
            err.to_string(),
            "Corrupted delegation_by_del_val key: expected type tag 0x31, got 0x32"
        );
    }
}
