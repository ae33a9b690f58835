//! Makes available common structures needed to evaluate the fluid law
//!
//! You may write `use hbfluid::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ParamHerschelBulkley, Properties, PropertyLookup, PropertyName};
pub use crate::material::{
    check, deviatoric_stress, effective_viscosity, equivalent_strain_rate, viscous_tangent, CheckReport,
    FluidLawTrait, HerschelBulkley2D, ParamViolation,
};
pub use crate::StrError;
