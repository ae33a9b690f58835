/// Defines the equivalent strain rate below which the fluid is considered at rest
pub const STRAIN_RATE_TOLERANCE: f64 = 1e-8;

/// Defines the space dimension of the 2D fluid laws
pub const NDIM: usize = 2;

/// Defines the number of strain (and stress) components in Voigt notation
pub const N_STRAIN: usize = 3;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/hbfluid/test";
