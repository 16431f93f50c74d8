//! # Allowance Lifecycle Tests (qc-19)
//!
//! Drives an allowance through grant, increase, partial use and exhaustion
//! the way the approve module applies transactions.

use qc_19_approve::*;
use shared_types::{AccAddress, ADDR_LEN};

fn acc(b: u8) -> AccAddress {
    AccAddress::new([b; ADDR_LEN])
}

fn qscs(entries: &[(&str, i128)]) -> Qscs {
    entries
        .iter()
        .map(|(name, amount)| Qsc::new(*name, Amount::new(*amount)))
        .collect::<Vec<_>>()
        .into()
}

/// Spend from an allowance if it covers the request.
fn use_allowance(
    current: &Approve,
    qos: Option<Amount>,
    spend: &Qscs,
) -> Result<Approve, ApproveError> {
    if !current.is_greater_or_equal(qos, spend) {
        return Err(ApproveError::InvalidInput("approve not enough".to_string()));
    }
    let remaining = current.minus(qos, spend)?;
    if !remaining.is_not_negative() {
        return Err(ApproveError::InvalidInput("approve not enough".to_string()));
    }
    Ok(remaining)
}

#[test]
fn test_grant_increase_use_exhaust() {
    let mut grant = Approve::new(acc(0x01), acc(0x02), Amount::new(100), qscs(&[("star", 10)]));
    grant.validate().unwrap();
    assert_eq!(grant.qscs.amount_of("STAR"), Amount::new(10));

    let mut increase = Approve::new(acc(0x01), acc(0x02), Amount::ZERO, qscs(&[("MOON", 4)]));
    increase.validate().unwrap();
    let grant = grant.plus(increase.qos, &increase.qscs).unwrap();
    assert_eq!(
        grant.to_canonical_string(),
        format!("from:{} to:{} qos:100 MOON:4 STAR:10 ", acc(0x01), acc(0x02))
    );

    let grant = use_allowance(&grant, Some(Amount::new(40)), &qscs(&[("STAR", 10)])).unwrap();
    assert_eq!(grant.qos(), Amount::new(60));
    assert_eq!(grant.qscs.amount_of("STAR"), Amount::ZERO);

    let grant = use_allowance(&grant, Some(Amount::new(60)), &qscs(&[("MOON", 4)])).unwrap();
    assert!(!grant.is_positive());
    assert!(grant.is_not_negative());
}

#[test]
fn test_overspend_on_secondary_asset_is_rejected() {
    let grant = Approve::new(acc(0x01), acc(0x02), Amount::new(50), qscs(&[("STAR", 1)]));

    // Same base amount: the secondary assets decide.
    assert!(use_allowance(&grant, Some(Amount::new(50)), &qscs(&[("STAR", 2)])).is_err());

    // Smaller base amount passes the comparison but leaves a negative remainder.
    assert!(use_allowance(&grant, Some(Amount::new(10)), &qscs(&[("STAR", 2)])).is_err());
}

#[test]
fn test_rejected_validation_reports_reason() {
    let mut grant = Approve::new(acc(0x01), acc(0x02), Amount::new(1), qscs(&[("Qos", 1)]));
    let err = grant.validate().unwrap_err();
    assert!(err.to_string().starts_with("Invalid approve:"));
}
