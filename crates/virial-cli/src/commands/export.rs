use crate::cli::ExportArgs;
use crate::error::{CliError, Result};
use std::fs::File;
use tracing::info;
use virialdb::data::export::write_csv;
use virialdb::data::table::Database;

pub fn run(args: &ExportArgs, db: &Database) -> Result<()> {
    let datasets = match &args.species {
        Some(species) => {
            let matched = db.datasets_for(species);
            if matched.is_empty() {
                return Err(CliError::Argument(format!(
                    "no datasets for species '{}'",
                    species
                )));
            }
            matched
        }
        None => db.iter().collect(),
    };

    let points: usize = datasets.iter().map(|ds| ds.len()).sum();
    let file = File::create(&args.output)?;
    write_csv(datasets.iter().copied(), file).map_err(|source| CliError::Export {
        path: args.output.clone(),
        source,
    })?;

    info!(
        "Wrote {} datasets ({} points) to {}.",
        datasets.len(),
        points,
        args.output.display()
    );
    println!(
        "✅ Exported {} datasets ({} rows) to {}.",
        datasets.len(),
        points,
        args.output.display()
    );
    Ok(())
}
