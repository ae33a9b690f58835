//! Regularized Herschel-Bulkley fluid law for finite element simulations
//!
//! The law maps a 2D strain-rate state (Voigt layout `[εxx, εyy, εxy]`) into the
//! deviatoric Cauchy stress and, optionally, the viscous tangent matrix.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
