use crate::base::N_STRAIN;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Computes the deviatoric stress given the strain rate and the effective viscosity
///
/// ```text
/// tr = εxx + εyy
/// σxx = 2 μ (εxx - tr/3)
/// σyy = 2 μ (εyy - tr/3)
/// σxy = 2 μ εxy
/// ```
///
/// **Note:** The trace is divided by 3 (and not by 2) to be consistent with the
/// three-dimensional deviatoric projection of the solver. Thus, `σxx + σyy = 2 μ tr/3`.
///
/// # Output
///
/// * `stress` -- `[σxx, σyy, σxy]` (len = 3)
///
/// # Input
///
/// * `strain_rate` -- `[εxx, εyy, εxy]` (len = 3)
/// * `viscosity` -- the effective viscosity μ
pub fn deviatoric_stress(stress: &mut Vector, strain_rate: &Vector, viscosity: f64) -> Result<(), StrError> {
    if stress.dim() != N_STRAIN {
        return Err("stress vector must have dimension 3");
    }
    if strain_rate.dim() != N_STRAIN {
        return Err("strain rate vector must have dimension 3");
    }
    let trace = strain_rate[0] + strain_rate[1];
    stress[0] = 2.0 * viscosity * (strain_rate[0] - trace / 3.0);
    stress[1] = 2.0 * viscosity * (strain_rate[1] - trace / 3.0);
    stress[2] = 2.0 * viscosity * strain_rate[2];
    Ok(())
}

/// Computes the viscous constitutive (tangent) matrix for a frozen effective viscosity
///
/// The matrix holds the derivatives of [deviatoric_stress()] with respect to the
/// strain-rate components, disregarding the dependence of μ on the strain rate:
///
/// ```text
///     ┌                       ┐
///     │  4μ/3  -2μ/3    0     │
/// D = │ -2μ/3   4μ/3    0     │
///     │   0      0     2μ     │
///     └                       ┘
/// ```
///
/// # Output
///
/// * `tangent` -- the 3×3 matrix D
pub fn viscous_tangent(tangent: &mut Matrix, viscosity: f64) -> Result<(), StrError> {
    let (nrow, ncol) = tangent.dims();
    if nrow != N_STRAIN || ncol != N_STRAIN {
        return Err("tangent matrix must be 3×3");
    }
    let two_thirds = 2.0 / 3.0;
    let four_thirds = 4.0 / 3.0;
    tangent.set(0, 0, four_thirds * viscosity);
    tangent.set(0, 1, -two_thirds * viscosity);
    tangent.set(0, 2, 0.0);
    tangent.set(1, 0, -two_thirds * viscosity);
    tangent.set(1, 1, four_thirds * viscosity);
    tangent.set(1, 2, 0.0);
    tangent.set(2, 0, 0.0);
    tangent.set(2, 1, 0.0);
    tangent.set(2, 2, 2.0 * viscosity);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{deviatoric_stress, viscous_tangent};
    use russell_lab::{approx_eq, vec_approx_eq, Matrix, Vector};

    #[test]
    fn deviatoric_stress_captures_errors() {
        let strain_rate = Vector::new(3);
        let mut stress = Vector::new(4);
        assert_eq!(
            deviatoric_stress(&mut stress, &strain_rate, 1.0).err(),
            Some("stress vector must have dimension 3")
        );
        let strain_rate = Vector::new(2);
        let mut stress = Vector::new(3);
        assert_eq!(
            deviatoric_stress(&mut stress, &strain_rate, 1.0).err(),
            Some("strain rate vector must have dimension 3")
        );
    }

    #[test]
    fn viscous_tangent_captures_errors() {
        let mut tangent = Matrix::new(3, 4);
        assert_eq!(viscous_tangent(&mut tangent, 1.0).err(), Some("tangent matrix must be 3×3"));
    }

    #[test]
    fn deviatoric_stress_works() {
        let mut stress = Vector::new(3);

        // pure shear
        let strain_rate = Vector::from(&[0.0, 0.0, 1.0]);
        deviatoric_stress(&mut stress, &strain_rate, 1.0).unwrap();
        vec_approx_eq(&stress, &[0.0, 0.0, 2.0], 1e-15);

        // isotropic expansion
        let strain_rate = Vector::from(&[3.0, 3.0, 0.0]);
        deviatoric_stress(&mut stress, &strain_rate, 0.5).unwrap();
        vec_approx_eq(&stress, &[1.0, 1.0, 0.0], 1e-15);

        // general
        let strain_rate = Vector::from(&[1.0, 2.0, 0.5]);
        deviatoric_stress(&mut stress, &strain_rate, 1.5).unwrap();
        vec_approx_eq(&stress, &[0.0, 3.0, 1.5], 1e-15);
    }

    #[test]
    fn trace_is_not_removed_in_2d() {
        let mut stress = Vector::new(3);
        let viscosity = 2.5;
        for strain_rate in [[1.0, 0.0, 0.0], [0.3, -0.1, 0.7], [-2.0, 5.0, 1.0]] {
            let eps = Vector::from(&strain_rate);
            deviatoric_stress(&mut stress, &eps, viscosity).unwrap();
            let trace = eps[0] + eps[1];
            approx_eq(stress[0] + stress[1], 2.0 * viscosity * trace / 3.0, 1e-14);
            assert!(f64::abs(stress[0] + stress[1]) > 0.0);
        }
    }

    #[test]
    fn viscous_tangent_works() {
        let mut tangent = Matrix::new(3, 3);
        viscous_tangent(&mut tangent, 3.0).unwrap();
        let correct = [[4.0, -2.0, 0.0], [-2.0, 4.0, 0.0], [0.0, 0.0, 6.0]];
        for i in 0..3 {
            for j in 0..3 {
                approx_eq(tangent.get(i, j), correct[i][j], 1e-15);
            }
        }
    }

    #[test]
    fn viscous_tangent_reproduces_stress() {
        let viscosity = 1.7;
        let strain_rate = Vector::from(&[0.4, -1.3, 0.25]);
        let mut stress = Vector::new(3);
        let mut tangent = Matrix::new(3, 3);
        deviatoric_stress(&mut stress, &strain_rate, viscosity).unwrap();
        viscous_tangent(&mut tangent, viscosity).unwrap();
        for i in 0..3 {
            let mut sum = 0.0;
            for j in 0..3 {
                sum += tangent.get(i, j) * strain_rate[j];
            }
            approx_eq(sum, stress[i], 1e-14);
        }
    }
}
