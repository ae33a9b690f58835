//! Implements the base structures for evaluating fluid laws

mod constants;
mod parameters;
mod properties;
pub use crate::base::constants::*;
pub use crate::base::parameters::*;
pub use crate::base::properties::*;
