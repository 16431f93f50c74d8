//! # Secondary Assets
//!
//! A `Qsc` is a named, non-native asset amount; `Qscs` is the list an
//! allowance carries next to its base amount. A name that is absent from the
//! list counts as zero.

use crate::domain::amount::Amount;
use crate::domain::errors::ApproveError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One secondary asset amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qsc {
    pub name: String,
    pub amount: Amount,
}

impl Qsc {
    pub fn new(name: impl Into<String>, amount: Amount) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl fmt::Display for Qsc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.amount)
    }
}

/// Secondary asset list in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Qscs(Vec<Qsc>);

impl Qscs {
    pub fn new(qscs: Vec<Qsc>) -> Self {
        Self(qscs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Qsc> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Qsc> {
        self.0.iter_mut()
    }

    /// Total held under `name`, zero when absent.
    pub fn amount_of(&self, name: &str) -> Amount {
        let total = self
            .0
            .iter()
            .filter(|q| q.name == name)
            .fold(0i128, |acc, q| acc.saturating_add(q.amount.value()));
        Amount::new(total)
    }

    /// Entries sorted by name, ties kept in insertion order.
    pub fn sorted(&self) -> Vec<&Qsc> {
        let mut sorted: Vec<&Qsc> = self.0.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Non-empty and every amount strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|q| q.amount.is_positive())
    }

    pub fn is_not_negative(&self) -> bool {
        self.0.iter().all(|q| !q.amount.is_negative())
    }

    pub fn negate(&self) -> Result<Qscs, ApproveError> {
        let negated = self
            .0
            .iter()
            .map(|q| Ok(Qsc::new(q.name.clone(), q.amount.checked_neg()?)))
            .collect::<Result<Vec<_>, ApproveError>>()?;
        Ok(Qscs(negated))
    }

    /// Merge by name. The result is sorted by name and has no zero entries.
    pub fn plus(&self, other: &Qscs) -> Result<Qscs, ApproveError> {
        let mut merged: BTreeMap<&str, Amount> = BTreeMap::new();
        for q in self.0.iter().chain(other.0.iter()) {
            let slot = merged.entry(q.name.as_str()).or_default();
            *slot = slot.checked_add(q.amount)?;
        }
        Ok(Qscs(
            merged
                .into_iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(|(name, amount)| Qsc::new(name, amount))
                .collect(),
        ))
    }

    pub fn minus(&self, other: &Qscs) -> Result<Qscs, ApproveError> {
        self.plus(&other.negate()?)
    }

    /// Every name holds at least as much here as in `other`.
    pub fn is_gte(&self, other: &Qscs) -> bool {
        self.names_with(other)
            .into_iter()
            .all(|name| self.amount_of(name) >= other.amount_of(name))
    }

    pub fn is_lt(&self, other: &Qscs) -> bool {
        !self.is_gte(other)
    }

    /// Same amount under every name, treating absence as zero.
    pub fn is_equal(&self, other: &Qscs) -> bool {
        self.names_with(other)
            .into_iter()
            .all(|name| self.amount_of(name) == other.amount_of(name))
    }

    fn names_with<'a>(&'a self, other: &'a Qscs) -> BTreeSet<&'a str> {
        self.0
            .iter()
            .chain(other.0.iter())
            .map(|q| q.name.as_str())
            .collect()
    }
}

impl From<Vec<Qsc>> for Qscs {
    fn from(qscs: Vec<Qsc>) -> Self {
        Self(qscs)
    }
}

impl<'a> IntoIterator for &'a Qscs {
    type Item = &'a Qsc;
    type IntoIter = std::slice::Iter<'a, Qsc>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
