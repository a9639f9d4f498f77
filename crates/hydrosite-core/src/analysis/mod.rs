//! # Analysis Module
//!
//! The numeric layer of hydrosite: Gaussian kernel density estimation and the
//! two site-level transformations built on top of it.
//!
//! - **Density Estimation** ([`kde`]) - 1-D and 2-D Gaussian KDE with Scott's
//!   bandwidth rule
//! - **Energy Distributions** ([`enbr`]) - per-site water-water neighbor
//!   interaction-energy density curves
//! - **Angular/Radial Structure** ([`rtheta`]) - per-site joint (theta, r)
//!   density surfaces normalized against bulk water

pub mod enbr;
pub mod kde;
pub mod rtheta;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("site {site} has no samples")]
    EmptySamples { site: usize },
    #[error("site {site} has an empty neighbor-count file")]
    EmptyNeighbors { site: usize },
    #[error("reference data set is empty")]
    EmptyReference,
    #[error("density estimation failed for site {site}: {source}")]
    Kde {
        site: usize,
        #[source]
        source: kde::KdeError,
    },
    #[error("density estimation failed for the reference data: {source}")]
    ReferenceKde {
        #[source]
        source: kde::KdeError,
    },
}
