use serde::Deserialize;
use std::fmt;

/// Precision rating of a published dataset per the Dymond & Smith (1980)
/// convention.
///
/// Class I datasets have an estimated precision better than 2% or 1 cm³/mol
/// (whichever is larger), class II better than 10% or 15 cm³/mol, and class
/// III worse than that. Datasets from sources that predate or ignore the
/// convention are `Unclassified`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityClass {
    #[serde(rename = "I")]
    I,
    #[serde(rename = "II")]
    II,
    #[serde(rename = "III")]
    III,
    #[serde(rename = "N/A")]
    Unclassified,
}

impl fmt::Display for QualityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityClass::I => "class I",
            QualityClass::II => "class II",
            QualityClass::III => "class III",
            QualityClass::Unclassified => "N/A",
        };
        write!(f, "{}", label)
    }
}

/// How a record's uncertainty series was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncertaintySource {
    /// Taken directly from the source publication.
    Reported,
    /// Derived from the numbered quality class by the estimator rule.
    Estimated(u8),
}

/// One literature-derived dataset of second virial coefficient measurements.
///
/// Records are built whole at load time and never mutated; the three series
/// are guaranteed equal in length by construction. Temperatures are in K,
/// coefficients and uncertainties in cm³/mol. The series are not necessarily
/// sorted and repeated temperatures are valid (repeat measurements).
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    pub species: String,
    pub reference: String,
    /// DOI or URL of the source, or a placeholder such as `"TO DO"` when
    /// the identifier has not been resolved.
    pub reference_id: String,
    /// Index of this entry in the Dymond & Smith compilation, when known.
    pub compilation_index: Option<String>,
    /// Free-text measurement note carried over from the compilation.
    pub note: Option<String>,
    pub class: QualityClass,
    pub temperatures: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub uncertainties: Vec<f64>,
    pub uncertainty_source: UncertaintySource,
}

impl DataSet {
    /// Number of measured points in this dataset.
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Iterates over `(temperature, coefficient, uncertainty)` triples.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.temperatures
            .iter()
            .zip(&self.coefficients)
            .zip(&self.uncertainties)
            .map(|((&t, &b), &err)| (t, b, err))
    }

    /// Lowest and highest temperature covered by this dataset, or `None`
    /// for an empty record.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        let first = *self.temperatures.first()?;
        Some(self.temperatures.iter().fold((first, first), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        }))
    }
}
