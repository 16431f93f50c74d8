//! # Shared Types Crate
//!
//! This crate contains the address types shared by the staking,
//! distribution and approve subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Address widths and their text form are
//!   defined once, here.
//! - **No Interchangeable Kinds**: Account, validator and consensus
//!   addresses are distinct types even though all are 20 bytes.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
