use super::{check, deviatoric_stress, effective_viscosity, viscous_tangent, CheckReport, FluidLawTrait};
use crate::base::{ParamHerschelBulkley, PropertyLookup, PropertyName, NDIM, N_STRAIN};
use crate::StrError;
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Implements the regularized Herschel-Bulkley law for 2D fluids
///
/// The law has no internal state; all parameters are read from the property
/// store on each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerschelBulkley2D;

impl HerschelBulkley2D {
    /// Holds the name of this law
    pub const NAME: &'static str = "HerschelBulkley2DLaw";

    /// Allocates a new instance
    pub fn new() -> Self {
        HerschelBulkley2D
    }

    /// Calculates the response with already resolved parameters
    ///
    /// Returns the effective viscosity. The tangent is only written if given.
    pub fn response(
        &self,
        stress: &mut Vector,
        tangent: Option<&mut Matrix>,
        param: &ParamHerschelBulkley,
        strain_rate: &Vector,
    ) -> Result<f64, StrError> {
        if strain_rate.dim() != N_STRAIN {
            return Err("strain rate vector must have dimension 3");
        }
        let viscosity = effective_viscosity(strain_rate, param);
        deviatoric_stress(stress, strain_rate, viscosity)?;
        if let Some(dd) = tangent {
            viscous_tangent(dd, viscosity)?;
        }
        Ok(viscosity)
    }
}

impl FluidLawTrait for HerschelBulkley2D {
    fn name(&self) -> &'static str {
        HerschelBulkley2D::NAME
    }

    fn dimension(&self) -> usize {
        NDIM
    }

    fn strain_size(&self) -> usize {
        N_STRAIN
    }

    fn check(&self, props: &dyn PropertyLookup) -> CheckReport {
        check(HerschelBulkley2D::NAME, props, &PropertyName::ALL)
    }

    fn calculate_response(
        &self,
        stress: &mut Vector,
        tangent: &mut Matrix,
        props: &dyn PropertyLookup,
        strain_rate: &Vector,
        compute_tangent: bool,
    ) -> Result<f64, StrError> {
        let param = ParamHerschelBulkley::from_properties(props)?;
        let dd = if compute_tangent { Some(tangent) } else { None };
        self.response(stress, dd, &param, strain_rate)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
