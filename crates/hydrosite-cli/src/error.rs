use hydrosite::analysis::AnalysisError;
use hydrosite::core::discovery::DiscoveryError;
use hydrosite::core::io::pdb::PdbError;
use hydrosite::core::loader::LoadError;
use hydrosite::core::summary::SummaryError;
use hydrosite::plot::PlotError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Pdb(#[from] PdbError),

    #[error("Failed to parse config file '{path}': {source}", path = path.display())]
    ConfigParsing {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid [{section}] window: {low_key} ({low}) must be below {high_key} ({high})")]
    InvalidWindow {
        section: &'static str,
        low_key: &'static str,
        high_key: &'static str,
        low: f64,
        high: f64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
