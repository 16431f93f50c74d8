pub mod errors;
pub mod param_set;
pub mod value;

pub use errors::*;
pub use param_set::*;
pub use value::*;
