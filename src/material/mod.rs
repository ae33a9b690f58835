//! Implements fluid laws

mod check;
mod fluid_law;
mod herschel_bulkley;
mod stress_assembler;
mod viscosity_model;
pub use crate::material::check::*;
pub use crate::material::fluid_law::*;
pub use crate::material::herschel_bulkley::*;
pub use crate::material::stress_assembler::*;
pub use crate::material::viscosity_model::*;
