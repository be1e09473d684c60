mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};
use virialdb::data::table::Database;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("VirialDB CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match cli.command {
        Commands::List => {
            let db = open_table(&cli)?;
            commands::list::run(&db)
        }
        Commands::Show(ref args) => {
            let db = open_table(&cli)?;
            commands::show::run(args, &db)
        }
        Commands::Export(ref args) => {
            let db = open_table(&cli)?;
            commands::export::run(args, &db)
        }
        Commands::Compute(ref args) => commands::compute::run(args),
    }
}

fn open_table(cli: &Cli) -> Result<Database> {
    let db = match &cli.table {
        Some(path) => {
            info!("Loading reference table from {}.", path.display());
            Database::load(path)?
        }
        None => Database::bundled()?,
    };
    debug!(
        "Reference table loaded: {} datasets, {} points.",
        db.len(),
        db.point_count()
    );
    Ok(db)
}
