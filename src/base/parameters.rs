use super::{PropertyLookup, PropertyName};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for the regularized Herschel-Bulkley fluid law
///
/// The effective viscosity reads:
///
/// ```text
/// μ = K γ̇ⁿ⁻¹ + (1 - exp(-m γ̇)) τy / γ̇
/// ```
///
/// where `K` is the dynamic viscosity (consistency index), `n` is the flow index,
/// `τy` is the yield shear stress, and `m` is the adaptive exponent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamHerschelBulkley {
    /// Dynamic viscosity (consistency index) K
    pub dynamic_viscosity: f64,

    /// Yield shear stress τy
    pub yield_shear: f64,

    /// Flow index n
    ///
    /// `n < 1` is shear-thinning, `n > 1` is shear-thickening, and `n = 1` yields a
    /// Bingham-like behavior.
    pub flow_index: f64,

    /// Adaptive (regularization) exponent m
    pub adaptive_exponent: f64,

    /// Bulk modulus (validated only; the volumetric response is handled elsewhere)
    pub bulk_modulus: f64,
}

impl ParamHerschelBulkley {
    /// Resolves the parameters from a property store
    ///
    /// The dynamic viscosity and the yield shear are read via the effective accessor.
    /// All properties must be present, thus the same sets are accepted here and by the checks.
    pub fn from_properties(props: &dyn PropertyLookup) -> Result<Self, StrError> {
        Ok(ParamHerschelBulkley {
            dynamic_viscosity: props.require_effective(PropertyName::DynamicViscosity)?,
            yield_shear: props.require_effective(PropertyName::YieldShear)?,
            flow_index: props.require(PropertyName::FlowIndex)?,
            adaptive_exponent: props.require(PropertyName::AdaptiveExponent)?,
            bulk_modulus: props.require(PropertyName::BulkModulus)?,
        })
    }

    /// Returns sample parameters for a yield-stress shear-thickening fluid
    pub fn sample() -> Self {
        ParamHerschelBulkley {
            dynamic_viscosity: 5.0, // Pa·sⁿ
            yield_shear: 10.0,      // Pa
            flow_index: 1.2,        // [-]
            adaptive_exponent: 2.0, // s
            bulk_modulus: 2.1e9,    // Pa
        }
    }

    /// Returns sample parameters for a Newtonian fluid (no yield stress, n = 1)
    pub fn sample_newtonian(viscosity: f64) -> Self {
        ParamHerschelBulkley {
            dynamic_viscosity: viscosity,
            yield_shear: 0.0,
            flow_index: 1.0,
            adaptive_exponent: 1.0,
            bulk_modulus: 2.1e9,
        }
    }
}

impl PropertyLookup for ParamHerschelBulkley {
    fn get(&self, name: PropertyName) -> Option<f64> {
        let value = match name {
            PropertyName::DynamicViscosity => self.dynamic_viscosity,
            PropertyName::YieldShear => self.yield_shear,
            PropertyName::FlowIndex => self.flow_index,
            PropertyName::AdaptiveExponent => self.adaptive_exponent,
            PropertyName::BulkModulus => self.bulk_modulus,
        };
        Some(value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
