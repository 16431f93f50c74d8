//! # Stake Parameters
//!
//! Governable tunables of the stake module, exposed to the parameter store
//! through [`ParamSet`].

use qc_20_params::{KeyValuePair, KeyValuePairs, ParamError, ParamKind, ParamSet, ParamValue};
use serde::{Deserialize, Serialize};

pub const STAKE_PARAM_SPACE: &str = "stake";

pub const KEY_MAX_VALIDATOR_CNT: &str = "max_validator_cnt";
pub const KEY_VOTING_STATUS_LEN: &str = "voting_status_len";
pub const KEY_VOTING_STATUS_LEAST: &str = "voting_status_least";
pub const KEY_SURVIVAL_SECS: &str = "survival_secs";
pub const KEY_UNBOND_FROZEN_HEIGHT: &str = "unbond_frozen_height";
pub const KEY_REDELEGATION_ACTIVE_HEIGHT: &str = "redelegation_active_height";

const PARAM_KEYS: [&str; 6] = [
    KEY_MAX_VALIDATOR_CNT,
    KEY_VOTING_STATUS_LEN,
    KEY_VOTING_STATUS_LEAST,
    KEY_SURVIVAL_SECS,
    KEY_UNBOND_FROZEN_HEIGHT,
    KEY_REDELEGATION_ACTIVE_HEIGHT,
];

/// Stake module parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeParams {
    /// Upper bound on the active validator set size.
    pub max_validator_cnt: i64,
    /// Vote window length, in blocks.
    pub voting_status_len: i64,
    /// Minimum signed blocks within the window to stay active.
    pub voting_status_least: i64,
    /// Seconds an inactive validator survives before removal.
    pub survival_secs: i64,
    /// Blocks an unbonding stays frozen before it is returned.
    pub unbond_frozen_height: i64,
    /// Blocks before a redelegation takes effect.
    pub redelegation_active_height: i64,
}

impl Default for StakeParams {
    fn default() -> Self {
        Self {
            max_validator_cnt: 10_000,
            voting_status_len: 100,
            voting_status_least: 50,
            survival_secs: 8 * 24 * 60 * 60,
            unbond_frozen_height: 201_600,
            redelegation_active_height: 201_600,
        }
    }
}

impl StakeParams {
    fn get(&self, key: &str) -> Option<i64> {
        let value = match key {
            KEY_MAX_VALIDATOR_CNT => self.max_validator_cnt,
            KEY_VOTING_STATUS_LEN => self.voting_status_len,
            KEY_VOTING_STATUS_LEAST => self.voting_status_least,
            KEY_SURVIVAL_SECS => self.survival_secs,
            KEY_UNBOND_FROZEN_HEIGHT => self.unbond_frozen_height,
            KEY_REDELEGATION_ACTIVE_HEIGHT => self.redelegation_active_height,
            _ => return None,
        };
        Some(value)
    }

    fn slot(&mut self, key: &str) -> Option<&mut i64> {
        let slot = match key {
            KEY_MAX_VALIDATOR_CNT => &mut self.max_validator_cnt,
            KEY_VOTING_STATUS_LEN => &mut self.voting_status_len,
            KEY_VOTING_STATUS_LEAST => &mut self.voting_status_least,
            KEY_SURVIVAL_SECS => &mut self.survival_secs,
            KEY_UNBOND_FROZEN_HEIGHT => &mut self.unbond_frozen_height,
            KEY_REDELEGATION_ACTIVE_HEIGHT => &mut self.redelegation_active_height,
            _ => return None,
        };
        Some(slot)
    }

    fn unknown(&self, key: &str) -> ParamError {
        ParamError::UnknownKey {
            space: STAKE_PARAM_SPACE,
            key: key.to_string(),
        }
    }

    fn check_range(&self, key: &str, value: i64) -> Result<(), ParamError> {
        let out_of_range = |reason: String| ParamError::OutOfRange {
            key: key.to_string(),
            reason,
        };

        if value <= 0 {
            return Err(out_of_range(format!("must be positive, got {}", value)));
        }
        if key == KEY_VOTING_STATUS_LEAST && value > self.voting_status_len {
            return Err(out_of_range(format!(
                "{} exceeds {} ({})",
                value, KEY_VOTING_STATUS_LEN, self.voting_status_len
            )));
        }
        if key == KEY_VOTING_STATUS_LEN && value < self.voting_status_least {
            return Err(out_of_range(format!(
                "{} is below {} ({})",
                value, KEY_VOTING_STATUS_LEAST, self.voting_status_least
            )));
        }
        Ok(())
    }
}

impl ParamSet for StakeParams {
    fn key_value_pairs(&self) -> KeyValuePairs {
        PARAM_KEYS
            .iter()
            .filter_map(|key| {
                self.get(key)
                    .map(|v| KeyValuePair::new(key.as_bytes(), ParamValue::Int(v)))
            })
            .collect()
    }

    fn validate(&self, key: &str, value: &str) -> Result<ParamValue, ParamError> {
        if self.get(key).is_none() {
            return Err(self.unknown(key));
        }
        let parsed = ParamValue::parse(key, value, ParamKind::Int)?;
        self.check_range(key, parsed.as_int(key)?)?;
        Ok(parsed)
    }

    fn param_space(&self) -> &'static str {
        STAKE_PARAM_SPACE
    }

    fn set_param(&mut self, key: &str, value: ParamValue) -> Result<(), ParamError> {
        let value = value.as_int(key)?;
        self.check_range(key, value)?;
        let unknown = self.unknown(key);
        let slot = self.slot(key).ok_or(unknown)?;
        *slot = value;
        Ok(())
    }
}
