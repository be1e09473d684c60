//! # Data Module
//!
//! This module holds the reference database of measured second virial
//! coefficients and everything needed to materialize it.
//!
//! ## Overview
//!
//! Each published dataset is one [`record::DataSet`]: a species formula, a
//! citation with persistent identifier, a Dymond & Smith quality class, and
//! three parallel series (temperature, coefficient, uncertainty) of equal
//! length. Uncertainties are either reported verbatim by the source
//! publication or derived from the quality class by the
//! [`precision::uncertainty_estimates`] rule at load time.
//!
//! ## Key Components
//!
//! - [`record`] - Dataset record types and the quality-class label
//! - [`precision`] - The quality-class uncertainty estimator
//! - [`table`] - The [`table::Database`] collection with its species index
//! - [`export`] - Flat CSV export, one row per measured point

pub mod export;
pub mod precision;
pub mod record;
pub mod table;
