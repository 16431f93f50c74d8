//! # Distribution Key Space
//!
//! Keys for fee pools, period summaries and delegator income receipts.
//! Tags live in the distribution store's own namespace and may repeat
//! values used by the stake store.
//!
//! | Table | Tag | Fields |
//! |-------|-----|--------|
//! | CommunityFeePool | 0x01 | - |
//! | LastProposer | 0x02 | - |
//! | BlockDistribution | 0x04 | - |
//! | DelegatorEarningsStart | 0x12 | val(20) + del(20) |
//! | ValidatorHistoryPeriodSummary | 0x13 | val(20) + period LE(8) |
//! | ValidatorCurrentPeriodSummary | 0x14 | val(20) |
//! | ValidatorEcoFeePool | 0x15 | val(20) |
//! | DelegatorPeriodIncome | 0x31 | height LE(8) + val(20) + del(20) |

use crate::domain::codec::{KeyTable, ADDR_LEN, INT_LEN};
use crate::domain::errors::KeyError;
use crate::domain::stake_keys::DelegationId;
use shared_types::{AccAddress, ValAddress};

/// Name of the distribution module's backing store.
pub const DISTRIBUTION_STORE_NAME: &str = "distribution";

const ADDR_INT_LEN: usize = ADDR_LEN + INT_LEN;
const ADDR_PAIR_LEN: usize = 2 * ADDR_LEN;
const INCOME_LEN: usize = INT_LEN + 2 * ADDR_LEN;

/// Type tags of the distribution key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKeyPrefix {
    CommunityFeePool,
    LastProposer,
    BlockDistribution,
    DelegatorEarningsStart,
    ValidatorHistoryPeriodSummary,
    ValidatorCurrentPeriodSummary,
    ValidatorEcoFeePool,
    DelegatorPeriodIncome,
}

impl KeyTable for DistributionKeyPrefix {
    fn tag(self) -> u8 {
        match self {
            DistributionKeyPrefix::CommunityFeePool => 0x01,
            DistributionKeyPrefix::LastProposer => 0x02,
            DistributionKeyPrefix::BlockDistribution => 0x04,
            DistributionKeyPrefix::DelegatorEarningsStart => 0x12,
            DistributionKeyPrefix::ValidatorHistoryPeriodSummary => 0x13,
            DistributionKeyPrefix::ValidatorCurrentPeriodSummary => 0x14,
            DistributionKeyPrefix::ValidatorEcoFeePool => 0x15,
            DistributionKeyPrefix::DelegatorPeriodIncome => 0x31,
        }
    }

    fn table(self) -> &'static str {
        match self {
            DistributionKeyPrefix::CommunityFeePool => "community_fee_pool",
            DistributionKeyPrefix::LastProposer => "last_proposer",
            DistributionKeyPrefix::BlockDistribution => "block_distribution",
            DistributionKeyPrefix::DelegatorEarningsStart => "delegator_earnings_start",
            DistributionKeyPrefix::ValidatorHistoryPeriodSummary => {
                "validator_history_period_summary"
            }
            DistributionKeyPrefix::ValidatorCurrentPeriodSummary => {
                "validator_current_period_summary"
            }
            DistributionKeyPrefix::ValidatorEcoFeePool => "validator_eco_fee_pool",
            DistributionKeyPrefix::DelegatorPeriodIncome => "delegator_period_income",
        }
    }
}

// =============================================================================
// SINGLETONS
// =============================================================================

pub fn community_fee_pool_key() -> Vec<u8> {
    DistributionKeyPrefix::CommunityFeePool.prefix()
}

pub fn last_proposer_key() -> Vec<u8> {
    DistributionKeyPrefix::LastProposer.prefix()
}

/// Amount awaiting distribution in the current block.
pub fn block_distribution_key() -> Vec<u8> {
    DistributionKeyPrefix::BlockDistribution.prefix()
}

// =============================================================================
// PER-VALIDATOR / PER-DELEGATOR RECORDS
// =============================================================================

pub fn delegator_earnings_start_key(validator: &ValAddress, delegator: &AccAddress) -> Vec<u8> {
    DistributionKeyPrefix::DelegatorEarningsStart
        .writer(ADDR_PAIR_LEN)
        .address(validator)
        .address(delegator)
        .finish()
}

/// Earnings-start records of every delegator of one validator.
pub fn delegator_earnings_start_prefix(validator: &ValAddress) -> Vec<u8> {
    DistributionKeyPrefix::DelegatorEarningsStart
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn parse_delegator_earnings_start_key(key: &[u8]) -> Result<DelegationId, KeyError> {
    let mut reader = DistributionKeyPrefix::DelegatorEarningsStart.reader(key, ADDR_PAIR_LEN)?;
    let validator = reader.address()?;
    let delegator = reader.address()?;
    Ok(DelegationId::new(delegator, validator))
}

pub fn validator_history_period_summary_key(validator: &ValAddress, period: i64) -> Vec<u8> {
    DistributionKeyPrefix::ValidatorHistoryPeriodSummary
        .writer(ADDR_INT_LEN)
        .address(validator)
        .int_le(period)
        .finish()
}

/// All historical periods of one validator.
///
/// Periods are little-endian, so scan order is not numeric period order.
pub fn validator_history_period_summary_prefix(validator: &ValAddress) -> Vec<u8> {
    DistributionKeyPrefix::ValidatorHistoryPeriodSummary
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn parse_validator_history_period_summary_key(
    key: &[u8],
) -> Result<(ValAddress, i64), KeyError> {
    let mut reader =
        DistributionKeyPrefix::ValidatorHistoryPeriodSummary.reader(key, ADDR_INT_LEN)?;
    Ok((reader.address()?, reader.int_le()?))
}

pub fn validator_current_period_summary_key(validator: &ValAddress) -> Vec<u8> {
    DistributionKeyPrefix::ValidatorCurrentPeriodSummary
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn validator_current_period_summary_prefix() -> Vec<u8> {
    DistributionKeyPrefix::ValidatorCurrentPeriodSummary.prefix()
}

pub fn parse_validator_current_period_summary_key(key: &[u8]) -> Result<ValAddress, KeyError> {
    DistributionKeyPrefix::ValidatorCurrentPeriodSummary
        .reader(key, ADDR_LEN)?
        .address()
}

pub fn validator_eco_fee_pool_key(validator: &ValAddress) -> Vec<u8> {
    DistributionKeyPrefix::ValidatorEcoFeePool
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn validator_eco_fee_pool_prefix() -> Vec<u8> {
    DistributionKeyPrefix::ValidatorEcoFeePool.prefix()
}

pub fn parse_validator_eco_fee_pool_key(key: &[u8]) -> Result<ValAddress, KeyError> {
    DistributionKeyPrefix::ValidatorEcoFeePool
        .reader(key, ADDR_LEN)?
        .address()
}

// =============================================================================
// INCOME RECEIPTS
// =============================================================================

/// A delegator's payout receipt for one height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodIncomeId {
    pub height: i64,
    pub validator: ValAddress,
    pub delegator: AccAddress,
}

impl PeriodIncomeId {
    pub fn new(height: i64, validator: ValAddress, delegator: AccAddress) -> Self {
        Self {
            height,
            validator,
            delegator,
        }
    }
}

pub fn delegator_period_income_key(
    height: i64,
    validator: &ValAddress,
    delegator: &AccAddress,
) -> Vec<u8> {
    DistributionKeyPrefix::DelegatorPeriodIncome
        .writer(INCOME_LEN)
        .int_le(height)
        .address(validator)
        .address(delegator)
        .finish()
}

/// All income receipts paid out at `height`.
pub fn delegator_period_income_prefix(height: i64) -> Vec<u8> {
    DistributionKeyPrefix::DelegatorPeriodIncome
        .writer(INT_LEN)
        .int_le(height)
        .finish()
}

pub fn parse_delegator_period_income_key(key: &[u8]) -> Result<PeriodIncomeId, KeyError> {
    let mut reader = DistributionKeyPrefix::DelegatorPeriodIncome.reader(key, INCOME_LEN)?;
    let height = reader.int_le()?;
    let validator = reader.address()?;
    let delegator = reader.address()?;
    Ok(PeriodIncomeId::new(height, validator, delegator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn val(b: u8) -> ValAddress {
        ValAddress::new([b; ADDR_LEN])
    }

    fn del(b: u8) -> AccAddress {
        AccAddress::new([b; ADDR_LEN])
    }

    #[test]
    fn test_singleton_keys() {
        assert_eq!(community_fee_pool_key(), vec![0x01]);
        assert_eq!(last_proposer_key(), vec![0x02]);
        assert_eq!(block_distribution_key(), vec![0x04]);
    }

    #[test]
    fn test_earnings_start_is_validator_first() {
        let key = delegator_earnings_start_key(&val(0x01), &del(0x02));
        assert_eq!(key.len(), 1 + 2 * ADDR_LEN);
        assert_eq!(key[0], 0x12);
        assert_eq!(&key[1..1 + ADDR_LEN], val(0x01).as_bytes());
        assert!(key.starts_with(&delegator_earnings_start_prefix(&val(0x01))));
        assert_eq!(
            parse_delegator_earnings_start_key(&key).unwrap(),
            DelegationId::new(del(0x02), val(0x01))
        );
    }

    #[test]
    fn test_history_period_is_little_endian() {
        let key = validator_history_period_summary_key(&val(0x05), 2);
        assert_eq!(key[0], 0x13);
        assert_eq!(&key[1 + ADDR_LEN..], &[2, 0, 0, 0, 0, 0, 0, 0]);
        assert!(key.starts_with(&validator_history_period_summary_prefix(&val(0x05))));
        assert_eq!(
            parse_validator_history_period_summary_key(&key).unwrap(),
            (val(0x05), 2)
        );
    }

    #[test]
    fn test_single_address_records() {
        let current = validator_current_period_summary_key(&val(0x06));
        assert_eq!(current[0], 0x14);
        assert_eq!(
            parse_validator_current_period_summary_key(&current).unwrap(),
            val(0x06)
        );

        let eco = validator_eco_fee_pool_key(&val(0x07));
        assert_eq!(eco[0], 0x15);
        assert_eq!(parse_validator_eco_fee_pool_key(&eco).unwrap(), val(0x07));

        assert!(parse_validator_eco_fee_pool_key(&current).is_err());
    }

    #[test]
    fn test_period_income_layout() {
        let key = delegator_period_income_key(3, &val(0x08), &del(0x09));
        assert_eq!(key.len(), 1 + INT_LEN + 2 * ADDR_LEN);
        assert_eq!(key[0], 0x31);
        assert_eq!(&key[1..9], &[3, 0, 0, 0, 0, 0, 0, 0]);
        assert!(key.starts_with(&delegator_period_income_prefix(3)));
        assert_eq!(
            parse_delegator_period_income_key(&key).unwrap(),
            PeriodIncomeId::new(3, val(0x08), del(0x09))
        );
    }

    #[test]
    fn test_period_income_parse_rejects_wrong_length() {
        let key = delegator_period_income_key(3, &val(0x08), &del(0x09));
        assert_eq!(
            parse_delegator_period_income_key(&key[..40]),
            Err(KeyError::InvalidLength {
                table: "delegator_period_income",
                expected: 49,
                actual: 40
            })
        );
    }
}
