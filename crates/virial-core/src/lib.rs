//! # VirialDB Core Library
//!
//! A curated reference database of experimentally measured second virial
//! coefficients (B) for fourteen small molecules, compiled from Dymond &
//! Smith (1980) and later literature, together with the numerical routines
//! the compilation relies on.
//!
//! The library has three parts:
//!
//! - **[`data`]: The Database.** Structured dataset records (species,
//!   citation, quality class, and parallel temperature / coefficient /
//!   uncertainty series), the quality-class uncertainty estimator, and a
//!   flat CSV export of the table.
//!
//! - **[`physics`]: The Potential Model.** Reduced Lennard-Jones and
//!   Stockmayer potentials and the full-integration evaluator that computes
//!   B(T) from molecular interaction parameters by trapezoidal quadrature.
//!
//! - **[`species`]: Static Metadata.** A compile-time map from formula
//!   tokens (`"CH4"`, `"C2H5OH"`, ...) to display metadata for the species
//!   covered by the bundled table.
//!
//! The bundled table is loaded with [`data::table::Database::bundled`]; an
//! external TOML file in the same format can be loaded with
//! [`data::table::Database::load`].

pub mod data;
pub mod physics;
pub mod species;
