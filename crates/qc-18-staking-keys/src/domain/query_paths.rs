//! # Query Paths
//!
//! Slash-joined routes for external read-only queries:
//! `custom/<module>/<kind>/<arg>...`. Arguments are the human-readable
//! address form, never binary key bytes. Nothing here is validated beyond
//! the arguments being present.

use crate::domain::distribution_keys::DISTRIBUTION_STORE_NAME;
use crate::domain::stake_keys::STAKE_STORE_NAME;
use shared_types::{AccAddress, ValAddress};
use std::fmt::{Display, Write};

pub const CUSTOM_QUERY_ROOT: &str = "custom";

pub const STAKE_QUERY_MODULE: &str = "stake";
pub const DELEGATION: &str = "delegation";
pub const DELEGATIONS: &str = "delegations";
pub const VALIDATOR_FLAG: &str = "validator";
pub const DELEGATOR_FLAG: &str = "delegator";
pub const UNBONDINGS: &str = "Unbondings";
pub const REDELEGATIONS: &str = "Redelegations";

pub const DISTRIBUTION_QUERY_MODULE: &str = "distribution";
pub const VALIDATOR_PERIOD_INFO: &str = "validatorPeriodInfo";
pub const DELEGATOR_INCOME_INFO: &str = "delegatorIncomeInfo";

/// `custom/<module>/<kind>/<args...>`
pub fn custom_query_path(module: &str, kind: &str, args: &[&dyn Display]) -> String {
    let mut path = format!("{}/{}/{}", CUSTOM_QUERY_ROOT, module, kind);
    for arg in args {
        // Writing into a String cannot fail.
        let _ = write!(path, "/{}", arg);
    }
    path
}

/// Raw key-value query route for a module store.
pub fn store_query_path(store_name: &str) -> String {
    format!("/store/{}/key", store_name)
}

pub fn stake_store_query_path() -> String {
    store_query_path(STAKE_STORE_NAME)
}

pub fn distribution_store_query_path() -> String {
    store_query_path(DISTRIBUTION_STORE_NAME)
}

// =============================================================================
// STAKE
// =============================================================================

pub fn delegation_query_path(delegator: &AccAddress, validator: &ValAddress) -> String {
    custom_query_path(STAKE_QUERY_MODULE, DELEGATION, &[delegator, validator])
}

pub fn delegations_by_validator_query_path(validator: &ValAddress) -> String {
    custom_query_path(
        STAKE_QUERY_MODULE,
        DELEGATIONS,
        &[&VALIDATOR_FLAG, validator],
    )
}

pub fn delegations_by_delegator_query_path(delegator: &AccAddress) -> String {
    custom_query_path(
        STAKE_QUERY_MODULE,
        DELEGATIONS,
        &[&DELEGATOR_FLAG, delegator],
    )
}

pub fn unbondings_by_delegator_query_path(delegator: &AccAddress) -> String {
    custom_query_path(STAKE_QUERY_MODULE, UNBONDINGS, &[delegator])
}

pub fn redelegations_by_delegator_query_path(delegator: &AccAddress) -> String {
    custom_query_path(STAKE_QUERY_MODULE, REDELEGATIONS, &[delegator])
}

// =============================================================================
// DISTRIBUTION
// =============================================================================

pub fn validator_period_info_query_path(validator: &ValAddress) -> String {
    custom_query_path(DISTRIBUTION_QUERY_MODULE, VALIDATOR_PERIOD_INFO, &[validator])
}

pub fn delegator_income_info_query_path(delegator: &AccAddress, validator: &ValAddress) -> String {
    custom_query_path(
        DISTRIBUTION_QUERY_MODULE,
        DELEGATOR_INCOME_INFO,
        &[delegator, validator],
    )
}
