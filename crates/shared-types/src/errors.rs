//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors raised while building an address from raw bytes or text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Byte slice is not exactly the address width.
    #[error("Invalid {kind} address length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Text form is not valid hex.
    #[error("Invalid {kind} address text: {text:?}")]
    InvalidText { kind: &'static str, text: String },
}
