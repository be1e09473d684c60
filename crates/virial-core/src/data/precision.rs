use thiserror::Error;

/// Per-class precision limits as `(fractional error, floor in cm³/mol)`,
/// indexed by quality class 1 to 3.
///
/// Classes 1 and 2 follow the Dymond & Smith (1980) wording (2% or 1
/// cm³/mol, 10% or 15 cm³/mol, whichever is larger). The class 3 limits
/// used in the compiled tables are 20% or 30 cm³/mol, twice the published
/// ">10% or >15" wording; the tabulated uncertainties are only reproducible
/// with these doubled constants, so they are kept as fixed policy.
const CLASS_LIMITS: [(f64, f64); 3] = [(0.02, 1.0), (0.10, 15.0), (0.20, 30.0)];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("quality class {0} is not one of the defined classes 1, 2, or 3")]
    InvalidClass(u8),
}

/// Precision limits for a numbered quality class.
pub fn class_limits(class: u8) -> Result<(f64, f64), PrecisionError> {
    match class {
        1..=3 => Ok(CLASS_LIMITS[(class - 1) as usize]),
        other => Err(PrecisionError::InvalidClass(other)),
    }
}

/// Assigns an absolute uncertainty to each coefficient value according to
/// its dataset's numbered quality class.
///
/// Each estimate is `max(percent × |value|, floor)` with the per-class
/// limits from [`class_limits`]; the result is parallel to `values` and
/// every entry is positive.
pub fn uncertainty_estimates(values: &[f64], class: u8) -> Result<Vec<f64>, PrecisionError> {
    let (percent, floor) = class_limits(class)?;
    Ok(values.iter().map(|v| (percent * v.abs()).max(floor)).collect())
}
