//! Physical constants and unit-conversion factors used by the potential
//! integration.

/// Boltzmann constant, in J/K.
pub const BOLTZMANN: f64 = 1.380_648_52e-23;

/// Permittivity of free space, in F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817_6e-12;

/// Avogadro's number folded with the Å³ → cm³ conversion (N_A × 10⁻²⁴).
///
/// Multiplying a per-molecule volume in Å³ by this factor yields a molar
/// volume in cm³/mol, the conventional unit for tabulated B values.
pub const AVOGADRO_ANGSTROM3_TO_CM3_MOL: f64 = 0.602_214_0;

/// Coulomb constant, in N·m²/C², used in the dipole-term statC conversion.
pub const COULOMB_CONSTANT: f64 = 8.998e9;
