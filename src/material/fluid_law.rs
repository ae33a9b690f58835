use super::CheckReport;
use crate::base::PropertyLookup;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Specifies the essential functions for fluid laws
pub trait FluidLawTrait: Send + Sync {
    /// Returns the name identifying the law (for diagnostics only)
    fn name(&self) -> &'static str;

    /// Returns the working space dimension
    fn dimension(&self) -> usize;

    /// Returns the number of strain (and stress) components
    fn strain_size(&self) -> usize;

    /// Checks the material properties
    ///
    /// This function should be called once per material definition before
    /// calling [FluidLawTrait::calculate_response()].
    fn check(&self, props: &dyn PropertyLookup) -> CheckReport;

    /// Calculates the deviatoric Cauchy stress and, optionally, the tangent matrix
    ///
    /// Returns the effective viscosity.
    ///
    /// # Output
    ///
    /// * `stress` -- the deviatoric stress (len = strain_size)
    /// * `tangent` -- the constitutive matrix (strain_size × strain_size); only
    ///   written if `compute_tangent` is true
    ///
    /// # Input
    ///
    /// * `props` -- the (checked) material properties
    /// * `strain_rate` -- the strain-rate (len = strain_size)
    /// * `compute_tangent` -- requests the constitutive matrix
    fn calculate_response(
        &self,
        stress: &mut Vector,
        tangent: &mut Matrix,
        props: &dyn PropertyLookup,
        strain_rate: &Vector,
        compute_tangent: bool,
    ) -> Result<f64, StrError>;
}
