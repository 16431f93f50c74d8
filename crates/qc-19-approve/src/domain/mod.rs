//! Domain layer for the allowance model.

pub mod amount;
pub mod approve;
pub mod config;
pub mod errors;
pub mod qsc;

pub use amount::*;
pub use approve::*;
pub use config::*;
pub use errors::*;
pub use qsc::*;
