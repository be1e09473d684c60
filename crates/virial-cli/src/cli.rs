use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "VirialDB CLI - Browse and export a curated reference database of measured second virial coefficients, and evaluate B(T) from Lennard-Jones/Stockmayer parameters.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Load the reference table from a TOML file instead of the bundled one
    #[arg(long, global = true, value_name = "PATH")]
    pub table: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the reference table, one line per species.
    List,
    /// Print every dataset recorded for one species.
    Show(ShowArgs),
    /// Export the reference table as flat CSV, one row per measured point.
    Export(ExportArgs),
    /// Compute the second virial coefficient from potential parameters.
    Compute(ComputeArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Species formula token (e.g. CH4, Ar, C2H5OH).
    #[arg(value_name = "SPECIES")]
    pub species: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path of the CSV file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Restrict the export to one species.
    #[arg(short, long, value_name = "SPECIES")]
    pub species: Option<String>,
}

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Temperature, in K.
    #[arg(short = 'T', long, required = true, value_name = "K")]
    pub temperature: f64,

    /// Collision diameter sigma, in Å.
    #[arg(short, long, required = true, value_name = "ANGSTROM")]
    pub sigma: f64,

    /// Well depth epsilon/k_B, in K.
    #[arg(short, long, required = true, value_name = "K")]
    pub epsilon: f64,

    /// Permanent dipole moment, in Debye. Nonzero values are known to give
    /// physically low coefficients; zero is the tabulated-quality choice.
    #[arg(short, long, default_value_t = 0.0, value_name = "DEBYE")]
    pub mu: f64,

    /// Integration method selector. Only "inf" (full integration) is
    /// available.
    #[arg(long, default_value = "inf", value_name = "METHOD")]
    pub method: String,

    /// Sweep up to this temperature (inclusive), printing one line per step.
    #[arg(long, value_name = "K")]
    pub t_end: Option<f64>,

    /// Temperature step for the sweep, in K.
    #[arg(long, default_value_t = 25.0, value_name = "K")]
    pub t_step: f64,
}
