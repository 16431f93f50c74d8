use crate::domain::ParamKind;
use thiserror::Error;

/// Reasons a parameter update is rejected.
///
/// These are input validation failures: the update is not applied and the
/// reason is surfaced to whoever proposed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Unknown parameter {key:?} in space {space}")]
    UnknownKey { space: &'static str, key: String },

    #[error("Parameter {key}: cannot parse {raw:?} as {expected}")]
    Unparsable {
        key: String,
        raw: String,
        expected: ParamKind,
    },

    #[error("Parameter {key}: {reason}")]
    OutOfRange { key: String, reason: String },

    #[error("Parameter {key}: expected {expected}, got {actual}")]
    KindMismatch {
        key: String,
        expected: ParamKind,
        actual: ParamKind,
    },
}
