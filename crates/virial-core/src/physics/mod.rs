//! # Physics Module
//!
//! Computes the second virial coefficient B(T) from pairwise intermolecular
//! potential parameters.
//!
//! - [`constants`] - Physical constants and unit-conversion factors
//! - [`potentials`] - Reduced Lennard-Jones and Stockmayer potential terms
//! - [`virial`] - The full-integration evaluator (trapezoidal quadrature of
//!   the Mayer integrand over a fixed radial grid)

pub mod constants;
pub mod potentials;
pub mod virial;
