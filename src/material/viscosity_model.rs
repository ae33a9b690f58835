use crate::base::{ParamHerschelBulkley, STRAIN_RATE_TOLERANCE};
use russell_lab::Vector;

/// Computes the equivalent (scalar) strain rate
///
/// ```text
/// γ̇ = √(2 εxx² + 2 εyy² + 4 εxy²)
/// ```
///
/// # Input
///
/// * `strain_rate` -- `[εxx, εyy, εxy]` (len = 3)
pub fn equivalent_strain_rate(strain_rate: &Vector) -> f64 {
    let (dxx, dyy, dxy) = (strain_rate[0], strain_rate[1], strain_rate[2]);
    f64::sqrt(2.0 * dxx * dxx + 2.0 * dyy * dyy + 4.0 * dxy * dxy)
}

/// Computes the effective viscosity given the equivalent strain rate
///
/// ```text
/// μ = K γ̇ⁿ⁻¹ + (1 - exp(-m γ̇)) τy / γ̇    if γ̇ ≥ tol
/// μ = τy m                                  otherwise
/// ```
///
/// The parameters must have been checked for non-negative values beforehand.
pub fn effective_viscosity_from_rate(rate: f64, param: &ParamHerschelBulkley) -> f64 {
    if rate < STRAIN_RATE_TOLERANCE {
        return param.yield_shear * param.adaptive_exponent;
    }
    let regularization = 1.0 - f64::exp(-param.adaptive_exponent * rate);
    param.dynamic_viscosity * f64::powf(rate, param.flow_index - 1.0) + regularization * param.yield_shear / rate
}

/// Computes the effective viscosity of the regularized Herschel-Bulkley model
///
/// # Input
///
/// * `strain_rate` -- `[εxx, εyy, εxy]` (len = 3)
/// * `param` -- the (checked) material parameters
pub fn effective_viscosity(strain_rate: &Vector, param: &ParamHerschelBulkley) -> f64 {
    effective_viscosity_from_rate(equivalent_strain_rate(strain_rate), param)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
