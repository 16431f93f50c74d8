pub mod codec;
pub mod distribution_keys;
pub mod errors;
pub mod params;
pub mod query_paths;
pub mod stake_keys;

pub use codec::*;
pub use distribution_keys::*;
pub use errors::*;
pub use params::*;
pub use query_paths::*;
pub use stake_keys::*;
