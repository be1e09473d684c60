use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use virialdb::data::record::UncertaintySource;
use virialdb::data::table::Database;
use virialdb::species;

pub fn run(args: &ShowArgs, db: &Database) -> Result<()> {
    let datasets = db.datasets_for(&args.species);
    if datasets.is_empty() {
        let known: Vec<_> = db.species().collect();
        return Err(CliError::Argument(format!(
            "no datasets for species '{}'; known species: {}",
            args.species,
            known.join(", ")
        )));
    }

    match species::lookup(&args.species) {
        Some(info) => println!("{} ({}): {} datasets\n", info.formula, info.name, datasets.len()),
        None => println!("{}: {} datasets\n", args.species, datasets.len()),
    }

    for (number, dataset) in datasets.iter().enumerate() {
        println!("[{}] {}", number + 1, dataset.reference);
        println!("    id: {}   quality: {}", dataset.reference_id, dataset.class);
        if let Some(index) = &dataset.compilation_index {
            println!("    compilation index: {}", index);
        }
        if let Some(note) = &dataset.note {
            println!("    note: {}", note);
        }
        match dataset.uncertainty_source {
            UncertaintySource::Estimated(class) => {
                println!("    uncertainties estimated from quality class {}", class)
            }
            UncertaintySource::Reported => println!("    uncertainties reported by the source"),
        }
        println!("    {:>10} {:>12} {:>10}", "T (K)", "B (cm³/mol)", "± (cm³/mol)");
        for (temperature, coefficient, uncertainty) in dataset.points() {
            println!(
                "    {:>10.2} {:>12.2} {:>10.2}",
                temperature, coefficient, uncertainty
            );
        }
        println!();
    }
    Ok(())
}
