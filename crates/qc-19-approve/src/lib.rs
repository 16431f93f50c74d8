//! # qc-19-approve
//!
//! Allowance value model: a signed, multi-asset spending permission granted
//! from one account to another.
//!
//! ## Role in System
//!
//! - **Validation**: Rejects malformed grants at the transaction boundary
//!   with a user-facing reason. Nothing here touches state.
//! - **Arithmetic**: Pure `plus`/`minus`/`negate` returning new records
//! - **Ordering**: Base asset first, secondary assets only as a tie-break
//! - **Canonical Form**: A deterministic string that doubles as the equality
//!   proxy, so asset insertion order never matters
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Distinct Parties | `from` and `to` are set and differ |
//! | 2 | Reserved Name | No secondary asset carries the base asset name (any case) |
//! | 3 | Unique Names | Secondary names are unique after trim + upper-case |
//! | 4 | Positive Grant | See [`Approve::is_positive`] |
//!
//! ## Usage
//!
//! ```ignore
//! use qc_19_approve::{Amount, Approve, Qsc, Qscs};
//!
//! let mut grant = Approve::new(from, to, Amount::new(100), Qscs::new(vec![Qsc::new("star", Amount::new(5))]));
//! grant.validate()?;
//! let remaining = grant.minus(Some(Amount::new(40)), &Qscs::default())?;
//! ```

pub mod domain;

pub use domain::*;
