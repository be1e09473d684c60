use super::record::DataSet;
use serde::Serialize;
use std::io::Write;

/// One exported row: a single measured point together with its record's
/// provenance.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    species: &'a str,
    reference: &'a str,
    reference_id: &'a str,
    class: String,
    temperature: f64,
    coefficient: f64,
    uncertainty: f64,
}

const HEADER: [&str; 7] = [
    "species",
    "reference",
    "reference_id",
    "class",
    "temperature",
    "coefficient",
    "uncertainty",
];

/// Writes datasets as flat CSV, one row per `(record, point)` pair.
///
/// This is the table's natural external representation: the parallel series
/// are unrolled so every row is self-contained. The header row is written
/// unconditionally, so an empty input still produces a well-formed file.
pub fn write_csv<'a, I, W>(datasets: I, writer: W) -> Result<(), csv::Error>
where
    I: IntoIterator<Item = &'a DataSet>,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for dataset in datasets {
        for (temperature, coefficient, uncertainty) in dataset.points() {
            csv_writer.serialize(CsvRow {
                species: &dataset.species,
                reference: &dataset.reference,
                reference_id: &dataset.reference_id,
                class: dataset.class.to_string(),
                temperature,
                coefficient,
                uncertainty,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}
