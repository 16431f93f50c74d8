//! # Parameter Values
//!
//! The closed set of scalar kinds a parameter may hold.

use crate::domain::ParamError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a [`ParamValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    Str,
    Int,
    Bool,
    Bytes,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::Str => "string",
            ParamKind::Int => "int",
            ParamKind::Bool => "bool",
            ParamKind::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Str(_) => ParamKind::Str,
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Bytes(_) => ParamKind::Bytes,
        }
    }

    /// Parse the raw text form of a value of the given kind.
    ///
    /// Bytes are given as hex, optionally `0x`-prefixed.
    pub fn parse(key: &str, raw: &str, kind: ParamKind) -> Result<Self, ParamError> {
        let text = raw.trim();
        let unparsable = || ParamError::Unparsable {
            key: key.to_string(),
            raw: raw.to_string(),
            expected: kind,
        };

        match kind {
            ParamKind::Str => Ok(ParamValue::Str(text.to_string())),
            ParamKind::Int => text
                .parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|_| unparsable()),
            ParamKind::Bool => text
                .parse::<bool>()
                .map(ParamValue::Bool)
                .map_err(|_| unparsable()),
            ParamKind::Bytes => {
                let digits = text.strip_prefix("0x").unwrap_or(text);
                hex::decode(digits)
                    .map(ParamValue::Bytes)
                    .map_err(|_| unparsable())
            }
        }
    }

    /// Integer payload, or a kind mismatch error naming `key`.
    pub fn as_int(&self, key: &str) -> Result<i64, ParamError> {
        match self {
            ParamValue::Int(v) => Ok(*v),
            other => Err(self.mismatch(key, ParamKind::Int, other.kind())),
        }
    }

    pub fn as_bool(&self, key: &str) -> Result<bool, ParamError> {
        match self {
            ParamValue::Bool(v) => Ok(*v),
            other => Err(self.mismatch(key, ParamKind::Bool, other.kind())),
        }
    }

    pub fn as_str(&self, key: &str) -> Result<&str, ParamError> {
        match self {
            ParamValue::Str(v) => Ok(v),
            other => Err(self.mismatch(key, ParamKind::Str, other.kind())),
        }
    }

    pub fn as_bytes(&self, key: &str) -> Result<&[u8], ParamError> {
        match self {
            ParamValue::Bytes(v) => Ok(v),
            other => Err(self.mismatch(key, ParamKind::Bytes, other.kind())),
        }
    }

    fn mismatch(&self, key: &str, expected: ParamKind, actual: ParamKind) -> ParamError {
        ParamError::KindMismatch {
            key: key.to_string(),
            expected,
            actual,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(v) => f.write_str(v),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Bytes(v) => write!(f, "0x{}", hex::encode(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_kind() {
        assert_eq!(
            ParamValue::parse("k", " 42 ", ParamKind::Int).unwrap(),
            ParamValue::Int(42)
        );
        assert_eq!(
            ParamValue::parse("k", "true", ParamKind::Bool).unwrap(),
            ParamValue::Bool(true)
        );
        assert_eq!(
            ParamValue::parse("k", "0x0aff", ParamKind::Bytes).unwrap(),
            ParamValue::Bytes(vec![0x0a, 0xff])
        );
        assert_eq!(
            ParamValue::parse("k", "abc", ParamKind::Str).unwrap(),
            ParamValue::Str("abc".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = ParamValue::parse("len", "ten", ParamKind::Int).unwrap_err();
        assert_eq!(
            err,
            ParamError::Unparsable {
                key: "len".to_string(),
                raw: "ten".to_string(),
                expected: ParamKind::Int,
            }
        );
        assert!(ParamValue::parse("flag", "yes", ParamKind::Bool).is_err());
        assert!(ParamValue::parse("blob", "0xg1", ParamKind::Bytes).is_err());
    }

    #[test]
    fn test_typed_accessor_reports_mismatch() {
        let value = ParamValue::Bool(false);
        assert!(!value.as_bool("flag").unwrap());

        let err = value.as_int("flag").unwrap_err();
        assert_eq!(
            err,
            ParamError::KindMismatch {
                key: "flag".to_string(),
                expected: ParamKind::Int,
                actual: ParamKind::Bool,
            }
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let value = ParamValue::Bytes(vec![1, 2, 3]);
        let text = value.to_string();
        assert_eq!(text, "0x010203");
        assert_eq!(
            ParamValue::parse("blob", &text, ParamKind::Bytes).unwrap(),
            value
        );
    }
}
