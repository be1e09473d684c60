use super::precision::{self, PrecisionError};
use super::record::{DataSet, QualityClass, UncertaintySource};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// The compiled reference table shipped with the crate: 287 datasets across
/// fourteen species, extracted from Dymond & Smith (1980) and the 2002
/// supplement.
const BUNDLED_TABLE: &str = include_str!("../../data/virial.toml");

#[derive(Debug, Deserialize)]
struct DataFile {
    dataset: Vec<RawDataSet>,
}

/// On-disk shape of one dataset entry, before uncertainty resolution and
/// shape validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawDataSet {
    species: String,
    reference: String,
    reference_id: String,
    compilation_index: Option<String>,
    note: Option<String>,
    class: QualityClass,
    temperatures: Vec<f64>,
    coefficients: Vec<f64>,
    uncertainties: UncertaintyField,
}

/// Uncertainties are either reported by the source publication as a
/// literal array, or written as `{ class = k }` and derived from the
/// coefficients by the estimator at load time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UncertaintyField {
    Estimated { class: u8 },
    Reported(Vec<f64>),
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error(
        "dataset '{species}' ({reference}) has mismatched series lengths: \
         {temperatures} temperatures, {coefficients} coefficients, {uncertainties} uncertainties"
    )]
    ShapeMismatch {
        species: String,
        reference: String,
        temperatures: usize,
        coefficients: usize,
        uncertainties: usize,
    },
    #[error("dataset '{species}' ({reference}): {source}")]
    Estimation {
        species: String,
        reference: String,
        #[source]
        source: PrecisionError,
    },
}

impl RawDataSet {
    fn resolve(self) -> Result<DataSet, DatabaseError> {
        let (uncertainties, uncertainty_source) = match self.uncertainties {
            UncertaintyField::Estimated { class } => {
                let estimates = precision::uncertainty_estimates(&self.coefficients, class)
                    .map_err(|source| DatabaseError::Estimation {
                        species: self.species.clone(),
                        reference: self.reference.clone(),
                        source,
                    })?;
                (estimates, UncertaintySource::Estimated(class))
            }
            UncertaintyField::Reported(values) => (values, UncertaintySource::Reported),
        };

        if self.temperatures.len() != self.coefficients.len()
            || self.coefficients.len() != uncertainties.len()
        {
            return Err(DatabaseError::ShapeMismatch {
                species: self.species,
                reference: self.reference,
                temperatures: self.temperatures.len(),
                coefficients: self.coefficients.len(),
                uncertainties: uncertainties.len(),
            });
        }

        Ok(DataSet {
            species: self.species,
            reference: self.reference,
            reference_id: self.reference_id,
            compilation_index: self.compilation_index,
            note: self.note,
            class: self.class,
            temperatures: self.temperatures,
            coefficients: self.coefficients,
            uncertainties,
            uncertainty_source,
        })
    }
}

/// The immutable reference table, with an explicit species index built once
/// at load time.
///
/// Records keep their file order; the index maps each formula to the
/// positions of its datasets, so species lookup does not scan the table.
#[derive(Debug, Clone)]
pub struct Database {
    datasets: Vec<DataSet>,
    species_order: Vec<String>,
    by_species: HashMap<String, Vec<usize>>,
}

impl Database {
    /// Loads the reference table bundled with the crate.
    pub fn bundled() -> Result<Self, DatabaseError> {
        Self::from_toml_str(BUNDLED_TABLE, "<bundled>")
    }

    /// Loads a table from an external TOML file in the bundled format.
    pub fn load(path: &Path) -> Result<Self, DatabaseError> {
        let content = std::fs::read_to_string(path).map_err(|e| DatabaseError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.to_string_lossy())
    }

    fn from_toml_str(content: &str, origin: &str) -> Result<Self, DatabaseError> {
        let file: DataFile = toml::from_str(content).map_err(|e| DatabaseError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let datasets = file
            .dataset
            .into_iter()
            .map(RawDataSet::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        let mut species_order = Vec::new();
        let mut by_species: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, dataset) in datasets.iter().enumerate() {
            let slot = by_species.entry(dataset.species.clone()).or_default();
            if slot.is_empty() {
                species_order.push(dataset.species.clone());
            }
            slot.push(position);
        }

        Ok(Self {
            datasets,
            species_order,
            by_species,
        })
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&DataSet> {
        self.datasets.get(position)
    }

    /// All datasets, in file order.
    pub fn iter(&self) -> impl Iterator<Item = &DataSet> {
        self.datasets.iter()
    }

    /// Distinct species formulas, in first-seen order.
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.species_order.iter().map(String::as_str)
    }

    /// Datasets for one species, in file order; empty when the formula is
    /// not in the table.
    pub fn datasets_for(&self, species: &str) -> Vec<&DataSet> {
        self.by_species
            .get(species)
            .map(|positions| positions.iter().map(|&p| &self.datasets[p]).collect())
            .unwrap_or_default()
    }

    /// Total number of measured points across all datasets.
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(DataSet::len).sum()
    }
}
