//! # Ports Layer
//!
//! Defines the port traits for the staking key space.
//!
//! ## Hexagonal Architecture
//!
//! - `outbound.rs` - Driven ports (the ordered store this layer writes keys into)

pub mod outbound;

pub use outbound::*;
