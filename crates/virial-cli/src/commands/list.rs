use crate::error::Result;
use virialdb::data::table::Database;
use virialdb::species;

pub fn run(db: &Database) -> Result<()> {
    println!(
        "{:<8} {:<18} {:>8} {:>8}  {}",
        "species", "name", "datasets", "points", "temperature span (K)"
    );
    for formula in db.species() {
        let datasets = db.datasets_for(formula);
        let points: usize = datasets.iter().map(|ds| ds.len()).sum();
        let span = datasets
            .iter()
            .filter_map(|ds| ds.temperature_range())
            .fold(None, |acc: Option<(f64, f64)>, (lo, hi)| match acc {
                Some((a, b)) => Some((a.min(lo), b.max(hi))),
                None => Some((lo, hi)),
            });
        let name = species::lookup(formula).map_or("-", |info| info.name);
        match span {
            Some((lo, hi)) => println!(
                "{:<8} {:<18} {:>8} {:>8}  {:.2} - {:.2}",
                formula,
                name,
                datasets.len(),
                points,
                lo,
                hi
            ),
            None => println!(
                "{:<8} {:<18} {:>8} {:>8}  -",
                formula,
                name,
                datasets.len(),
                points
            ),
        }
    }
    println!();
    println!("{} datasets, {} points in total.", db.len(), db.point_count());
    Ok(())
}
