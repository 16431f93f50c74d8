//! # Parameter Set Contract
//!
//! The capability a module hands to the external parameter store:
//! enumerate its parameters, validate a proposed raw value for one key, and
//! name the namespace its keys live under.

use crate::domain::{ParamError, ParamValue};

/// A parameter key and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    pub key: Vec<u8>,
    pub value: ParamValue,
}

impl KeyValuePair {
    pub fn new(key: impl Into<Vec<u8>>, value: ParamValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

pub type KeyValuePairs = Vec<KeyValuePair>;

/// A module's set of governable parameters.
pub trait ParamSet {
    /// Every parameter with its current value, in a stable order.
    fn key_value_pairs(&self) -> KeyValuePairs;

    /// Parse and check a proposed raw value for `key`.
    ///
    /// Does not modify `self`.
    fn validate(&self, key: &str, value: &str) -> Result<ParamValue, ParamError>;

    /// Namespace under which the parameter store files these keys.
    fn param_space(&self) -> &'static str;

    /// Store an already validated value.
    fn set_param(&mut self, key: &str, value: ParamValue) -> Result<(), ParamError>;

    /// Validate `raw` for `key` and store it on success.
    fn apply(&mut self, key: &str, raw: &str) -> Result<ParamValue, ParamError> {
        let value = self.validate(key, raw).map_err(|e| {
            tracing::debug!("[qc-20] Rejected {}/{} = {:?}: {}", self.param_space(), key, raw, e);
            e
        })?;
        self.set_param(key, value.clone())?;
        Ok(value)
    }
}
