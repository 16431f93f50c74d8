//! # qc-20-params
//!
//! Parameter Set contract for Quantum-Chain ledger modules.
//!
//! ## Role in System
//!
//! - **Contract Only**: A module (stake, distribution, ...) exposes its
//!   tunables through [`ParamSet`]; the parameter store that persists and
//!   governs them lives outside this crate.
//! - **Closed Value Kinds**: Every parameter is one of the scalar kinds in
//!   [`ParamValue`]. There is no untyped value slot.
//!
//! ## Usage
//!
//! ```ignore
//! use qc_20_params::ParamSet;
//!
//! let mut params = StakeParams::default();
//! for pair in params.key_value_pairs() {
//!     println!("{} = {}", String::from_utf8_lossy(&pair.key), pair.value);
//! }
//! params.apply("voting_status_len", "120")?;
//! ```

pub mod domain;

pub use domain::*;
