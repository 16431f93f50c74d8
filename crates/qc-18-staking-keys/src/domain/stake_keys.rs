//! # Stake Key Space
//!
//! Keys for validators, their secondary indexes, vote windows, delegations
//! and the unbonding/redelegation queues.
//!
//! ## Layouts
//!
//! | Table | Tag | Fields |
//! |-------|-----|--------|
//! | Validator | 0x01 | val(20) |
//! | ValidatorByConsensus | 0x02 | cons(20) |
//! | ValidatorByInactiveTime | 0x04 | time BE(8) + val(20) |
//! | ValidatorByVotePower | 0x05 | power BE(8) + val(20) |
//! | VoteWindowStats | 0x11 | val(20) |
//! | VoteWindowSlot | 0x12 | val(20) + index LE(8) |
//! | DelegationByDelVal | 0x31 | del(20) + val(20) |
//! | DelegationByValDel | 0x32 | val(20) + del(20) |
//! | UnbondingByHeightDelVal | 0x41 | height BE(8) + del(20) + val(20) |
//! | UnbondingByDelHeightVal | 0x42 | del(20) + height BE(8) + val(20) |
//! | UnbondingByValHeightDel | 0x43 | val(20) + height BE(8) + del(20) |
//! | RedelegationByHeightDelFromVal | 0x51 | height BE(8) + del(20) + from(20) |
//! | RedelegationByDelHeightFromVal | 0x52 | del(20) + height BE(8) + from(20) |
//! | RedelegationByFromValHeightDel | 0x53 | from(20) + height BE(8) + del(20) |
//!
//! Ties on a sortable numeric field are broken by the address bytes that
//! follow it; no separate comparator exists.
//!
//! Multi-directional indexes are independent keys. Writers must put and
//! delete every direction together; [`unbonding_keys`] and
//! [`redelegation_keys`] build the full set for that purpose.

use crate::domain::codec::{KeyTable, ADDR_LEN, INT_LEN};
use crate::domain::errors::KeyError;
use shared_types::{AccAddress, ConsAddress, ValAddress};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the stake module's backing store.
pub const STAKE_STORE_NAME: &str = "validator";

const CURRENT_VALIDATORS_ADDRESS_KEY: &[u8] = b"currentValidatorsAddressKey";

const ADDR_INT_LEN: usize = ADDR_LEN + INT_LEN;
const ADDR_PAIR_LEN: usize = 2 * ADDR_LEN;
const QUEUE_LEN: usize = INT_LEN + 2 * ADDR_LEN;

/// Type tags of the stake key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeKeyPrefix {
    Validator,
    ValidatorByConsensus,
    ValidatorByInactiveTime,
    ValidatorByVotePower,
    VoteWindowStats,
    VoteWindowSlot,
    DelegationByDelVal,
    DelegationByValDel,
    UnbondingByHeightDelVal,
    UnbondingByDelHeightVal,
    UnbondingByValHeightDel,
    RedelegationByHeightDelFromVal,
    RedelegationByDelHeightFromVal,
    RedelegationByFromValHeightDel,
}

impl KeyTable for StakeKeyPrefix {
    fn tag(self) -> u8 {
        match self {
            StakeKeyPrefix::Validator => 0x01,
            StakeKeyPrefix::ValidatorByConsensus => 0x02,
            StakeKeyPrefix::ValidatorByInactiveTime => 0x04,
            StakeKeyPrefix::ValidatorByVotePower => 0x05,
            StakeKeyPrefix::VoteWindowStats => 0x11,
            StakeKeyPrefix::VoteWindowSlot => 0x12,
            StakeKeyPrefix::DelegationByDelVal => 0x31,
            StakeKeyPrefix::DelegationByValDel => 0x32,
            StakeKeyPrefix::UnbondingByHeightDelVal => 0x41,
            StakeKeyPrefix::UnbondingByDelHeightVal => 0x42,
            StakeKeyPrefix::UnbondingByValHeightDel => 0x43,
            StakeKeyPrefix::RedelegationByHeightDelFromVal => 0x51,
            StakeKeyPrefix::RedelegationByDelHeightFromVal => 0x52,
            StakeKeyPrefix::RedelegationByFromValHeightDel => 0x53,
        }
    }

    fn table(self) -> &'static str {
        match self {
            StakeKeyPrefix::Validator => "validator",
            StakeKeyPrefix::ValidatorByConsensus => "validator_by_consensus",
            StakeKeyPrefix::ValidatorByInactiveTime => "validator_by_inactive_time",
            StakeKeyPrefix::ValidatorByVotePower => "validator_by_vote_power",
            StakeKeyPrefix::VoteWindowStats => "vote_window_stats",
            StakeKeyPrefix::VoteWindowSlot => "vote_window_slot",
            StakeKeyPrefix::DelegationByDelVal => "delegation_by_del_val",
            StakeKeyPrefix::DelegationByValDel => "delegation_by_val_del",
            StakeKeyPrefix::UnbondingByHeightDelVal => "unbonding_by_height_del_val",
            StakeKeyPrefix::UnbondingByDelHeightVal => "unbonding_by_del_height_val",
            StakeKeyPrefix::UnbondingByValHeightDel => "unbonding_by_val_height_del",
            StakeKeyPrefix::RedelegationByHeightDelFromVal => "redelegation_by_height_del_from_val",
            StakeKeyPrefix::RedelegationByDelHeightFromVal => "redelegation_by_del_height_from_val",
            StakeKeyPrefix::RedelegationByFromValHeightDel => "redelegation_by_from_val_height_del",
        }
    }
}

// =============================================================================
// VALIDATORS
// =============================================================================

/// Singleton key holding the current validator set's addresses.
pub fn current_validators_address_key() -> Vec<u8> {
    CURRENT_VALIDATORS_ADDRESS_KEY.to_vec()
}

pub fn validator_key(validator: &ValAddress) -> Vec<u8> {
    StakeKeyPrefix::Validator
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn validator_prefix() -> Vec<u8> {
    StakeKeyPrefix::Validator.prefix()
}

pub fn parse_validator_key(key: &[u8]) -> Result<ValAddress, KeyError> {
    StakeKeyPrefix::Validator.reader(key, ADDR_LEN)?.address()
}

/// Index from a consensus address to the validator record.
pub fn validator_by_consensus_key(consensus: &ConsAddress) -> Vec<u8> {
    StakeKeyPrefix::ValidatorByConsensus
        .writer(ADDR_LEN)
        .address(consensus)
        .finish()
}

pub fn parse_validator_by_consensus_key(key: &[u8]) -> Result<ConsAddress, KeyError> {
    StakeKeyPrefix::ValidatorByConsensus
        .reader(key, ADDR_LEN)?
        .address()
}

/// Index entry for a validator that went inactive at `inactive_secs`
/// (unix seconds).
pub fn inactive_validator_key(inactive_secs: i64, validator: &ValAddress) -> Vec<u8> {
    StakeKeyPrefix::ValidatorByInactiveTime
        .writer(ADDR_INT_LEN)
        .int_be(inactive_secs)
        .address(validator)
        .finish()
}

/// [`inactive_validator_key`] from a wall-clock instant, truncated to
/// whole UTC seconds.
pub fn inactive_validator_key_at(inactive_at: SystemTime, validator: &ValAddress) -> Vec<u8> {
    let secs = match inactive_at.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    };
    inactive_validator_key(secs, validator)
}

pub fn inactive_validator_prefix() -> Vec<u8> {
    StakeKeyPrefix::ValidatorByInactiveTime.prefix()
}

pub fn parse_inactive_validator_key(key: &[u8]) -> Result<(i64, ValAddress), KeyError> {
    let mut reader = StakeKeyPrefix::ValidatorByInactiveTime.reader(key, ADDR_INT_LEN)?;
    Ok((reader.int_be()?, reader.address()?))
}

/// Index entry ordering validators by vote power, then address.
pub fn validator_by_vote_power_key(vote_power: i64, validator: &ValAddress) -> Vec<u8> {
    StakeKeyPrefix::ValidatorByVotePower
        .writer(ADDR_INT_LEN)
        .int_be(vote_power)
        .address(validator)
        .finish()
}

pub fn validator_by_vote_power_prefix() -> Vec<u8> {
    StakeKeyPrefix::ValidatorByVotePower.prefix()
}

pub fn parse_validator_by_vote_power_key(key: &[u8]) -> Result<(i64, ValAddress), KeyError> {
    let mut reader = StakeKeyPrefix::ValidatorByVotePower.reader(key, ADDR_INT_LEN)?;
    Ok((reader.int_be()?, reader.address()?))
}

// =============================================================================
// VOTE WINDOW
// =============================================================================

pub fn vote_window_stats_key(validator: &ValAddress) -> Vec<u8> {
    StakeKeyPrefix::VoteWindowStats
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn vote_window_stats_prefix() -> Vec<u8> {
    StakeKeyPrefix::VoteWindowStats.prefix()
}

pub fn parse_vote_window_stats_key(key: &[u8]) -> Result<ValAddress, KeyError> {
    StakeKeyPrefix::VoteWindowStats.reader(key, ADDR_LEN)?.address()
}

pub fn vote_window_slot_key(validator: &ValAddress, index: i64) -> Vec<u8> {
    StakeKeyPrefix::VoteWindowSlot
        .writer(ADDR_INT_LEN)
        .address(validator)
        .int_le(index)
        .finish()
}

/// All window slots of one validator.
pub fn vote_window_slot_prefix(validator: &ValAddress) -> Vec<u8> {
    StakeKeyPrefix::VoteWindowSlot
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn parse_vote_window_slot_key(key: &[u8]) -> Result<(ValAddress, i64), KeyError> {
    let mut reader = StakeKeyPrefix::VoteWindowSlot.reader(key, ADDR_INT_LEN)?;
    Ok((reader.address()?, reader.int_le()?))
}

// =============================================================================
// DELEGATIONS
// =============================================================================

/// Identity of a delegation, recoverable from either direction's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelegationId {
    pub delegator: AccAddress,
    pub validator: ValAddress,
}

impl DelegationId {
    pub fn new(delegator: AccAddress, validator: ValAddress) -> Self {
        Self {
            delegator,
            validator,
        }
    }
}

pub fn delegation_by_del_val_key(delegator: &AccAddress, validator: &ValAddress) -> Vec<u8> {
    StakeKeyPrefix::DelegationByDelVal
        .writer(ADDR_PAIR_LEN)
        .address(delegator)
        .address(validator)
        .finish()
}

/// All delegations made by one delegator.
pub fn delegation_by_delegator_prefix(delegator: &AccAddress) -> Vec<u8> {
    StakeKeyPrefix::DelegationByDelVal
        .writer(ADDR_LEN)
        .address(delegator)
        .finish()
}

pub fn parse_delegation_by_del_val_key(key: &[u8]) -> Result<DelegationId, KeyError> {
    let mut reader = StakeKeyPrefix::DelegationByDelVal.reader(key, ADDR_PAIR_LEN)?;
    let delegator = reader.address()?;
    let validator = reader.address()?;
    Ok(DelegationId::new(delegator, validator))
}

pub fn delegation_by_val_del_key(validator: &ValAddress, delegator: &AccAddress) -> Vec<u8> {
    StakeKeyPrefix::DelegationByValDel
        .writer(ADDR_PAIR_LEN)
        .address(validator)
        .address(delegator)
        .finish()
}

/// All delegations held by one validator.
pub fn delegation_by_validator_prefix(validator: &ValAddress) -> Vec<u8> {
    StakeKeyPrefix::DelegationByValDel
        .writer(ADDR_LEN)
        .address(validator)
        .finish()
}

pub fn parse_delegation_by_val_del_key(key: &[u8]) -> Result<DelegationId, KeyError> {
    let mut reader = StakeKeyPrefix::DelegationByValDel.reader(key, ADDR_PAIR_LEN)?;
    let validator = reader.address()?;
    let delegator = reader.address()?;
    Ok(DelegationId::new(delegator, validator))
}

/// Both directions of a delegation: `[del→val, val→del]`.
pub fn delegation_keys(id: &DelegationId) -> [Vec<u8>; 2] {
    [
        delegation_by_del_val_key(&id.delegator, &id.validator),
        delegation_by_val_del_key(&id.validator, &id.delegator),
    ]
}

// =============================================================================
// UNBONDING / REDELEGATION QUEUES
// =============================================================================

/// Identity of a queued unbonding or redelegation.
///
/// For redelegations `validator` is the source validator of the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueEntryId {
    /// Height at which the entry matures.
    pub height: i64,
    pub delegator: AccAddress,
    pub validator: ValAddress,
}

impl QueueEntryId {
    pub fn new(height: i64, delegator: AccAddress, validator: ValAddress) -> Self {
        Self {
            height,
            delegator,
            validator,
        }
    }
}

/// Field order of one queue direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueLayout {
    HeightDelVal,
    DelHeightVal,
    ValHeightDel,
}

fn queue_key(prefix: StakeKeyPrefix, layout: QueueLayout, entry: &QueueEntryId) -> Vec<u8> {
    let writer = prefix.writer(QUEUE_LEN);
    let writer = match layout {
        QueueLayout::HeightDelVal => writer
            .int_be(entry.height)
            .address(&entry.delegator)
            .address(&entry.validator),
        QueueLayout::DelHeightVal => writer
            .address(&entry.delegator)
            .int_be(entry.height)
            .address(&entry.validator),
        QueueLayout::ValHeightDel => writer
            .address(&entry.validator)
            .int_be(entry.height)
            .address(&entry.delegator),
    };
    writer.finish()
}

fn parse_queue_key(
    prefix: StakeKeyPrefix,
    layout: QueueLayout,
    key: &[u8],
) -> Result<QueueEntryId, KeyError> {
    let mut reader = prefix.reader(key, QUEUE_LEN)?;
    let entry = match layout {
        QueueLayout::HeightDelVal => {
            let height = reader.int_be()?;
            let delegator = reader.address()?;
            let validator = reader.address()?;
            QueueEntryId::new(height, delegator, validator)
        }
        QueueLayout::DelHeightVal => {
            let delegator = reader.address()?;
            let height = reader.int_be()?;
            let validator = reader.address()?;
            QueueEntryId::new(height, delegator, validator)
        }
        QueueLayout::ValHeightDel => {
            let validator = reader.address()?;
            let height = reader.int_be()?;
            let delegator = reader.address()?;
            QueueEntryId::new(height, delegator, validator)
        }
    };
    Ok(entry)
}

fn height_prefix(prefix: StakeKeyPrefix, height: i64) -> Vec<u8> {
    prefix.writer(INT_LEN).int_be(height).finish()
}

fn address_prefix(prefix: StakeKeyPrefix, address: &impl AsRef<[u8]>) -> Vec<u8> {
    prefix.writer(ADDR_LEN).address(address).finish()
}

pub fn unbonding_by_height_key(height: i64, delegator: &AccAddress, validator: &ValAddress) -> Vec<u8> {
    queue_key(
        StakeKeyPrefix::UnbondingByHeightDelVal,
        QueueLayout::HeightDelVal,
        &QueueEntryId::new(height, *delegator, *validator),
    )
}

/// All unbondings maturing at `height`.
pub fn unbonding_by_height_prefix(height: i64) -> Vec<u8> {
    height_prefix(StakeKeyPrefix::UnbondingByHeightDelVal, height)
}

pub fn parse_unbonding_by_height_key(key: &[u8]) -> Result<QueueEntryId, KeyError> {
    parse_queue_key(
        StakeKeyPrefix::UnbondingByHeightDelVal,
        QueueLayout::HeightDelVal,
        key,
    )
}

pub fn unbonding_by_delegator_key(delegator: &AccAddress, height: i64, validator: &ValAddress) -> Vec<u8> {
    queue_key(
        StakeKeyPrefix::UnbondingByDelHeightVal,
        QueueLayout::DelHeightVal,
        &QueueEntryId::new(height, *delegator, *validator),
    )
}

/// All unbondings of one delegator, by height.
pub fn unbonding_by_delegator_prefix(delegator: &AccAddress) -> Vec<u8> {
    address_prefix(StakeKeyPrefix::UnbondingByDelHeightVal, delegator)
}

pub fn parse_unbonding_by_delegator_key(key: &[u8]) -> Result<QueueEntryId, KeyError> {
    parse_queue_key(
        StakeKeyPrefix::UnbondingByDelHeightVal,
        QueueLayout::DelHeightVal,
        key,
    )
}

pub fn unbonding_by_validator_key(validator: &ValAddress, height: i64, delegator: &AccAddress) -> Vec<u8> {
    queue_key(
        StakeKeyPrefix::UnbondingByValHeightDel,
        QueueLayout::ValHeightDel,
        &QueueEntryId::new(height, *delegator, *validator),
    )
}

/// All unbondings out of one validator, by height.
pub fn unbonding_by_validator_prefix(validator: &ValAddress) -> Vec<u8> {
    address_prefix(StakeKeyPrefix::UnbondingByValHeightDel, validator)
}

pub fn parse_unbonding_by_validator_key(key: &[u8]) -> Result<QueueEntryId, KeyError> {
    parse_queue_key(
        StakeKeyPrefix::UnbondingByValHeightDel,
        QueueLayout::ValHeightDel,
        key,
    )
}

/// All three directions of an unbonding: `[by height, by delegator, by validator]`.
pub fn unbonding_keys(entry: &QueueEntryId) -> [Vec<u8>; 3] {
    [
        queue_key(
            StakeKeyPrefix::UnbondingByHeightDelVal,
            QueueLayout::HeightDelVal,
            entry,
        ),
        queue_key(
            StakeKeyPrefix::UnbondingByDelHeightVal,
            QueueLayout::DelHeightVal,
            entry,
        ),
        queue_key(
            StakeKeyPrefix::UnbondingByValHeightDel,
            QueueLayout::ValHeightDel,
            entry,
        ),
    ]
}

pub fn redelegation_by_height_key(
    height: i64,
    delegator: &AccAddress,
    from_validator: &ValAddress,
) -> Vec<u8> {
    queue_key(
        StakeKeyPrefix::RedelegationByHeightDelFromVal,
        QueueLayout::HeightDelVal,
        &QueueEntryId::new(height, *delegator, *from_validator),
    )
}

/// All redelegations completing at `height`.
pub fn redelegation_by_height_prefix(height: i64) -> Vec<u8> {
    height_prefix(StakeKeyPrefix::RedelegationByHeightDelFromVal, height)
}

pub fn parse_redelegation_by_height_key(key: &[u8]) -> Result<QueueEntryId, KeyError> {
    parse_queue_key(
        StakeKeyPrefix::RedelegationByHeightDelFromVal,
        QueueLayout::HeightDelVal,
        key,
    )
}

pub fn redelegation_by_delegator_key(
    delegator: &AccAddress,
    height: i64,
    from_validator: &ValAddress,
) -> Vec<u8> {
    queue_key(
        StakeKeyPrefix::RedelegationByDelHeightFromVal,
        QueueLayout::DelHeightVal,
        &QueueEntryId::new(height, *delegator, *from_validator),
    )
}

pub fn redelegation_by_delegator_prefix(delegator: &AccAddress) -> Vec<u8> {
    address_prefix(StakeKeyPrefix::RedelegationByDelHeightFromVal, delegator)
}

pub fn parse_redelegation_by_delegator_key(key: &[u8]) -> Result<QueueEntryId, KeyError> {
    parse_queue_key(
        StakeKeyPrefix::RedelegationByDelHeightFromVal,
        QueueLayout::DelHeightVal,
        key,
    )
}

pub fn redelegation_by_from_validator_key(
    from_validator: &ValAddress,
    height: i64,
    delegator: &AccAddress,
) -> Vec<u8> {
    queue_key(
        StakeKeyPrefix::RedelegationByFromValHeightDel,
        QueueLayout::ValHeightDel,
        &QueueEntryId::new(height, *delegator, *from_validator),
    )
}

pub fn redelegation_by_from_validator_prefix(from_validator: &ValAddress) -> Vec<u8> {
    address_prefix(StakeKeyPrefix::RedelegationByFromValHeightDel, from_validator)
}

pub fn parse_redelegation_by_from_validator_key(key: &[u8]) -> Result<QueueEntryId, KeyError> {
    parse_queue_key(
        StakeKeyPrefix::RedelegationByFromValHeightDel,
        QueueLayout::ValHeightDel,
        key,
    )
}

/// All three directions of a redelegation: `[by height, by delegator, by source validator]`.
pub fn redelegation_keys(entry: &QueueEntryId) -> [Vec<u8>; 3] {
    [
        queue_key(
            StakeKeyPrefix::RedelegationByHeightDelFromVal,
            QueueLayout::HeightDelVal,
            entry,
        ),
        queue_key(
            StakeKeyPrefix::RedelegationByDelHeightFromVal,
            QueueLayout::DelHeightVal,
            entry,
        ),
        queue_key(
            StakeKeyPrefix::RedelegationByFromValHeightDel,
            QueueLayout::ValHeightDel,
            entry,
        ),
    ]
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
    fn test_validator_key_layout() {
        let key = validator_key(&val(0xAB));
        assert_eq!(key.len(), 1 + ADDR_LEN);
        assert_eq!(key[0], 0x01);
        assert_eq!(parse_validator_key(&key).unwrap(), val(0xAB));
        assert!(key.starts_with(&validator_prefix()));
    }

    #[test]
    fn test_consensus_key_round_trip() {
        let cons = ConsAddress::new([0x07; ADDR_LEN]);
        let key = validator_by_consensus_key(&cons);
        assert_eq!(key[0], 0x02);
        assert_eq!(parse_validator_by_consensus_key(&key).unwrap(), cons);
    }

    #[test]
    fn test_vote_power_key_is_big_endian() {
        let key = validator_by_vote_power_key(0x0102, &val(0xFF));
        assert_eq!(key.len(), 1 + INT_LEN + ADDR_LEN);
        assert_eq!(&key[..9], &[0x05, 0, 0, 0, 0, 0, 0, 0x01, 0x02]);
        assert_eq!(
            parse_validator_by_vote_power_key(&key).unwrap(),
            (0x0102, val(0xFF))
        );
    }

    #[test]
    fn test_equal_vote_power_ties_break_on_address() {
        let low = validator_by_vote_power_key(10, &val(0x01));
        let high = validator_by_vote_power_key(10, &val(0x02));
        assert!(low < high);
    }

    #[test]
    fn test_vote_power_parse_is_exact_length() {
        let mut key = validator_by_vote_power_key(10, &val(0x01));
        key.push(0x00);
        assert_eq!(
            parse_validator_by_vote_power_key(&key),
            Err(KeyError::InvalidLength {
                table: "validator_by_vote_power",
                expected: 29,
                actual: 30
            })
        );
        assert!(parse_validator_by_vote_power_key(&key[..10]).is_err());
    }

    #[test]
    fn test_inactive_key_from_system_time() {
        let at = UNIX_EPOCH + std::time::Duration::from_millis(1_500_999);
        let key = inactive_validator_key_at(at, &val(0x03));
        assert_eq!(key, inactive_validator_key(1_500, &val(0x03)));
        assert_eq!(
            parse_inactive_validator_key(&key).unwrap(),
            (1_500, val(0x03))
        );
    }

    #[test]
    fn test_vote_window_slot_index_is_little_endian() {
        let key = vote_window_slot_key(&val(0x09), 1);
        assert_eq!(key[0], 0x12);
        assert_eq!(&key[1 + ADDR_LEN..], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert!(key.starts_with(&vote_window_slot_prefix(&val(0x09))));
        assert_eq!(parse_vote_window_slot_key(&key).unwrap(), (val(0x09), 1));
    }

    #[test]
    fn test_vote_window_stats_round_trip() {
        let key = vote_window_stats_key(&val(0x44));
        assert_eq!(key[0], 0x11);
        assert_eq!(parse_vote_window_stats_key(&key).unwrap(), val(0x44));
        assert!(parse_vote_window_stats_key(&validator_key(&val(0x44))).is_err());
    }

    #[test]
    fn test_delegation_directions_parse_to_same_id() {
        let id = DelegationId::new(del(0x11), val(0x22));
        let [by_del, by_val] = delegation_keys(&id);

        assert_eq!(by_del[0], 0x31);
        assert_eq!(by_val[0], 0x32);
        assert_eq!(parse_delegation_by_del_val_key(&by_del).unwrap(), id);
        assert_eq!(parse_delegation_by_val_del_key(&by_val).unwrap(), id);
        assert!(by_del.starts_with(&delegation_by_delegator_prefix(&id.delegator)));
        assert!(by_val.starts_with(&delegation_by_validator_prefix(&id.validator)));
    }

    #[test]
    fn test_delegation_parse_rejects_other_direction() {
        let key = delegation_by_val_del_key(&val(0x22), &del(0x11));
        assert_eq!(
            parse_delegation_by_del_val_key(&key),
            Err(KeyError::UnknownTag {
                table: "delegation_by_del_val",
                expected: 0x31,
                actual: 0x32
            })
        );
    }

    #[test]
    fn test_unbonding_directions_use_distinct_tags() {
        let entry = QueueEntryId::new(77, del(0x01), val(0x02));
        let keys = unbonding_keys(&entry);

        assert_eq!(keys[0][0], 0x41);
        assert_eq!(keys[1][0], 0x42);
        assert_eq!(keys[2][0], 0x43);
        assert_eq!(keys[0], unbonding_by_height_key(77, &del(0x01), &val(0x02)));
        assert_eq!(keys[1], unbonding_by_delegator_key(&del(0x01), 77, &val(0x02)));
        assert_eq!(keys[2], unbonding_by_validator_key(&val(0x02), 77, &del(0x01)));

        assert_eq!(parse_unbonding_by_height_key(&keys[0]).unwrap(), entry);
        assert_eq!(parse_unbonding_by_delegator_key(&keys[1]).unwrap(), entry);
        assert_eq!(parse_unbonding_by_validator_key(&keys[2]).unwrap(), entry);
    }

    #[test]
    fn test_unbonding_prefixes_cover_their_keys() {
        let entry = QueueEntryId::new(5, del(0x0A), val(0x0B));
        let [by_height, by_del, by_val] = unbonding_keys(&entry);

        assert!(by_height.starts_with(&unbonding_by_height_prefix(5)));
        assert!(!by_height.starts_with(&unbonding_by_height_prefix(6)));
        assert!(by_del.starts_with(&unbonding_by_delegator_prefix(&entry.delegator)));
        assert!(by_val.starts_with(&unbonding_by_validator_prefix(&entry.validator)));
    }

    #[test]
    fn test_redelegation_directions_use_distinct_tags() {
        let entry = QueueEntryId::new(900, del(0x31), val(0x32));
        let keys = redelegation_keys(&entry);

        assert_eq!(keys[0][0], 0x51);
        assert_eq!(keys[1][0], 0x52);
        assert_eq!(keys[2][0], 0x53);
        assert_eq!(keys[0], redelegation_by_height_key(900, &del(0x31), &val(0x32)));
        assert_eq!(keys[1], redelegation_by_delegator_key(&del(0x31), 900, &val(0x32)));
        assert_eq!(
            keys[2],
            redelegation_by_from_validator_key(&val(0x32), 900, &del(0x31))
        );

        assert_eq!(parse_redelegation_by_height_key(&keys[0]).unwrap(), entry);
        assert_eq!(parse_redelegation_by_delegator_key(&keys[1]).unwrap(), entry);
        assert_eq!(parse_redelegation_by_from_validator_key(&keys[2]).unwrap(), entry);

        assert!(keys[0].starts_with(&redelegation_by_height_prefix(900)));
        assert!(keys[1].starts_with(&redelegation_by_delegator_prefix(&entry.delegator)));
        assert!(keys[2].starts_with(&redelegation_by_from_validator_prefix(&entry.validator)));
    }

    #[test]
    fn test_queue_parse_rejects_truncated_key() {
        let key = unbonding_by_height_key(1, &del(1), &val(2));
        assert_eq!(
            parse_unbonding_by_height_key(&key[..key.len() - 1]),
            Err(KeyError::InvalidLength {
                table: "unbonding_by_height_del_val",
                expected: 49,
                actual: 48
            })
        );
    }

    #[test]
    fn test_returned_keys_do_not_alias() {
        let mut first = validator_key(&val(0x01));
        first[1] = 0xEE;
        let second = validator_key(&val(0x01));
        assert_eq!(second[1], 0x01);

        let mut prefix = unbonding_by_delegator_prefix(&del(0x01));
        prefix.extend_from_slice(&[0xFF; 8]);
        assert_eq!(unbonding_by_delegator_prefix(&del(0x01)).len(), 1 + ADDR_LEN);
    }

    #[test]
    fn test_current_validators_key_is_ascii() {
        assert_eq!(
            current_validators_address_key(),
            b"currentValidatorsAddressKey".to_vec()
        );
    }
}
