//! # Allowance
//!
//! `Approve` grants `to` the right to spend up to a base amount plus a set of
//! secondary asset amounts out of `from`'s account.
//!
//! A missing base amount is treated as zero by every operation. Records
//! compare equal when their canonical strings match, so the order in which
//! secondary assets were listed never matters.

use crate::domain::amount::Amount;
use crate::domain::config::ApproveConfig;
use crate::domain::errors::ApproveError;
use crate::domain::qsc::Qscs;
use serde::{Deserialize, Serialize};
use shared_types::AccAddress;
use std::collections::HashSet;
use std::fmt::{self, Write};

/// Label of the base amount in the canonical string.
pub const BASE_ASSET_LABEL: &str = "qos";

/// Spending allowance from one account to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Approve {
    pub from: AccAddress,
    pub to: AccAddress,
    #[serde(default)]
    pub qos: Option<Amount>,
    #[serde(default)]
    pub qscs: Qscs,
}

impl Approve {
    pub fn new(from: AccAddress, to: AccAddress, qos: Amount, qscs: Qscs) -> Self {
        Self {
            from,
            to,
            qos: Some(qos),
            qscs,
        }
    }

    /// Base amount, zero when unset.
    pub fn qos(&self) -> Amount {
        self.qos.unwrap_or_default()
    }

    /// [`Approve::validate_with`] under the default configuration.
    pub fn validate(&mut self) -> Result<(), ApproveError> {
        self.validate_with(&ApproveConfig::default())
    }

    /// Check the allowance invariants.
    ///
    /// Secondary asset names are rewritten to their trimmed upper-case form
    /// as they are checked, so the record may be modified even when
    /// validation fails.
    pub fn validate_with(&mut self, config: &ApproveConfig) -> Result<(), ApproveError> {
        let result = self.check(config);
        if let Err(err) = &result {
            tracing::debug!("[qc-19] rejected approve {} -> {}: {}", self.from, self.to, err);
        }
        result
    }

    fn check(&mut self, config: &ApproveConfig) -> Result<(), ApproveError> {
        if self.from.is_empty() {
            return Err(ApproveError::invalid("from address is empty"));
        }
        if self.to.is_empty() {
            return Err(ApproveError::invalid("to address is empty"));
        }
        if self.from == self.to {
            return Err(ApproveError::invalid("addresses of from and to are the same"));
        }
        if !self.is_positive() {
            return Err(ApproveError::invalid("coins must be positive"));
        }

        let mut seen = HashSet::with_capacity(self.qscs.len());
        for qsc in self.qscs.iter_mut() {
            qsc.name = qsc.name.trim().to_uppercase();
            if qsc.name.is_empty() {
                return Err(ApproveError::invalid("qsc name is empty"));
            }
            if config.is_base_asset(&qsc.name) {
                return Err(ApproveError::invalid(format!(
                    "qscs can not contain {}, not case sensitive",
                    config.base_asset_name
                )));
            }
            if !seen.insert(qsc.name.clone()) {
                return Err(ApproveError::invalid(format!("repeat qsc:{}", qsc.name)));
            }
        }
        Ok(())
    }

    /// A grant is positive when it is either made purely of positive
    /// secondary assets (zero base), or anchored by a positive base amount
    /// with no negative secondary asset.
    pub fn is_positive(&self) -> bool {
        let qos = self.qos();
        if qos.is_zero() {
            self.qscs.is_positive()
        } else if qos.is_positive() {
            self.is_not_negative()
        } else {
            false
        }
    }

    pub fn is_not_negative(&self) -> bool {
        !self.qos().is_negative() && self.qscs.is_not_negative()
    }

    pub fn negate(&self) -> Result<Approve, ApproveError> {
        Ok(Self::new(
            self.from,
            self.to,
            self.qos().checked_neg()?,
            self.qscs.negate()?,
        ))
    }

    pub fn plus(&self, qos: Option<Amount>, qscs: &Qscs) -> Result<Approve, ApproveError> {
        Ok(Self::new(
            self.from,
            self.to,
            self.qos().checked_add(qos.unwrap_or_default())?,
            self.qscs.plus(qscs)?,
        ))
    }

    pub fn minus(&self, qos: Option<Amount>, qscs: &Qscs) -> Result<Approve, ApproveError> {
        Ok(Self::new(
            self.from,
            self.to,
            self.qos().checked_sub(qos.unwrap_or_default())?,
            self.qscs.minus(qscs)?,
        ))
    }

    /// The base amount decides alone unless both base amounts are equal, in
    /// which case every secondary asset must be at least as large.
    pub fn is_greater_or_equal(&self, qos: Option<Amount>, qscs: &Qscs) -> bool {
        let (mine, theirs) = (self.qos(), qos.unwrap_or_default());
        if mine != theirs {
            return mine > theirs;
        }
        self.qscs.is_gte(qscs)
    }

    /// On equal base amounts the secondary assets must be neither less than
    /// nor equal to `qscs`.
    pub fn is_greater_than(&self, qos: Option<Amount>, qscs: &Qscs) -> bool {
        let (mine, theirs) = (self.qos(), qos.unwrap_or_default());
        if mine != theirs {
            return mine > theirs;
        }
        !self.qscs.is_lt(qscs) && !self.qscs.is_equal(qscs)
    }

    /// Canonical equality. See [`Approve::to_canonical_string`].
    pub fn equals(&self, other: &Approve) -> bool {
        self.to_canonical_string() == other.to_canonical_string()
    }

    /// `from:<A> to:<B> qos:<N> ` then `<NAME>:<N> ` per secondary asset,
    /// sorted by name. Every field ends with a single space.
    pub fn to_canonical_string(&self) -> String {
        let mut out = format!(
            "from:{} to:{} {}:{} ",
            self.from,
            self.to,
            BASE_ASSET_LABEL,
            self.qos()
        );
        for qsc in self.qscs.sorted() {
            // Writing into a String cannot fail.
            let _ = write!(out, "{} ", qsc);
        }
        out
    }
}

impl PartialEq for Approve {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Approve {}

impl fmt::Display for Approve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}
