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
    author = "Kamran Haider, Steven Ramsay, Anthony Cruz Balberdy",
    version,
    about = "hydrosite - post-processing and visualization for molecular-dynamics hydration-site analysis (HSA/GIST) output.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plot per-site water-water neighbor interaction-energy distributions.
    Enbr(EnbrArgs),
    /// Plot per-site angular/radial (theta, r) density surfaces.
    Rtheta(RthetaArgs),
    /// Write water coordinates to a PDB file for visualization.
    Watpdb(WatpdbArgs),
}

/// Arguments for the `enbr` subcommand.
#[derive(Args, Debug)]
pub struct EnbrArgs {
    /// Directory holding the per-site data files (NNNEwwnbr.txt, ...).
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Restrict to these site indices (default: every discovered site).
    #[arg(short, long, value_name = "INDEX", num_args(1..))]
    pub sites: Vec<usize>,

    /// Normalize each density by the site's mean neighbor count (reads
    /// NNNNnbrs.txt alongside each energy file).
    #[arg(long)]
    pub nbr_norm: bool,

    /// Bulk-reference energy samples to overlay on every site plot.
    #[arg(long, value_name = "PATH")]
    pub ref_data: Option<PathBuf>,

    /// Mean neighbor count of the reference system, applied with --nbr-norm.
    #[arg(long, value_name = "FLOAT", requires = "ref_data")]
    pub ref_nbrs: Option<f64>,

    /// Path to a settings file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `rtheta` subcommand.
#[derive(Args, Debug)]
pub struct RthetaArgs {
    /// Directory holding the per-site data files (NNNr_theta.txt).
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Restrict to these site indices (default: every discovered site).
    #[arg(short, long, value_name = "INDEX", num_args(1..))]
    pub sites: Vec<usize>,

    /// Path to a settings file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `watpdb` subcommand.
#[derive(Args, Debug)]
pub struct WatpdbArgs {
    /// Text file with one x y z coordinate triple per line.
    #[arg(value_name = "COORDS_FILE")]
    pub coords: PathBuf,

    /// Output file stem; ".pdb" is appended.
    #[arg(short, long, required = true, value_name = "STEM")]
    pub output: PathBuf,

    /// Treat coordinates as O, H1, H2 triples forming full water residues.
    #[arg(long)]
    pub full_water: bool,
}
