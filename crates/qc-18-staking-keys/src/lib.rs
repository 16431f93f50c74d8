//! # qc-18-staking-keys
//!
//! Deterministic key encoding and secondary indexing for the stake and
//! distribution modules.
//!
//! ## Role in System
//!
//! - **Key Builders**: Turn entity identities (validators, delegations,
//!   queue entries, distribution records) into fixed-layout byte keys
//! - **Key Parsers**: Recover the identity from a key returned by a range
//!   scan, treating any layout mismatch as state corruption
//! - **Query Paths**: Human-readable routes for external read-only queries
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Exact Layout | Key length == 1 + sum of field widths, always |
//! | 2 | Scan Order | Big-endian numeric fields sort numerically (non-negative values) |
//! | 3 | Address Tie-break | Equal numeric fields order by the address bytes that follow |
//! | 4 | Independent Directions | Each index direction is its own key, written together by the caller |
//! | 5 | No Aliasing | Every returned key or prefix is a fresh allocation |
//! | 6 | Corruption Halts | A key that fails to parse stops the state machine (`OrHalt`) |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Codec, key spaces, query paths, stake parameters
//! - `ports/` - The ordered store port
//! - `adapters/` - In-memory ordered store
//!
//! ## Usage
//!
//! ```ignore
//! use qc_18_staking_keys::{
//!     parse_unbonding_by_height_key, unbonding_by_height_prefix, unbonding_keys, OrHalt,
//!     OrderedKeyValueStore, QueueEntryId,
//! };
//!
//! for key in unbonding_keys(&QueueEntryId::new(height, delegator, validator)) {
//!     store.put(&key, &amount)?;
//! }
//!
//! for (key, _) in store.prefix_scan(&unbonding_by_height_prefix(height))? {
//!     let entry = parse_unbonding_by_height_key(&key).or_halt();
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
