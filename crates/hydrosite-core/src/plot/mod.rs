//! # Plot Module
//!
//! PNG rendering of analysis results with a fixed publication-style figure
//! geometry (3 in square at 300 dpi).
//!
//! - **Energy Curves** ([`enbr`]) - per-site Enbr density plots
//! - **Angular/Radial Surfaces** ([`rtheta`]) - 3-D (theta, r) density
//!   surfaces

pub mod enbr;
pub mod rtheta;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Figure edge length in pixels (3 inches at 300 dpi).
pub const FIGURE_SIZE_PX: u32 = 900;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("curve for site {site} has fewer than two grid points")]
    EmptyCurve { site: usize },
    #[error("failed to render '{path}': {message}", path = path.display())]
    Render { path: PathBuf, message: String },
}

/// Output path for a site's Enbr plot (`NNN_Enbr_plot.png`).
pub fn enbr_plot_path(data_dir: &Path, site: usize) -> PathBuf {
    data_dir.join(format!("{site:03}_Enbr_plot.png"))
}

/// Output path for a site's (theta, r) plot (`NNN_rtheta_plot.png`).
pub fn rtheta_plot_path(data_dir: &Path, site: usize) -> PathBuf {
    data_dir.join(format!("{site:03}_rtheta_plot.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_paths_are_zero_padded() {
        let dir = Path::new("/data");
        assert_eq!(
            enbr_plot_path(dir, 7),
            PathBuf::from("/data/007_Enbr_plot.png")
        );
        assert_eq!(
            rtheta_plot_path(dir, 42),
            PathBuf::from("/data/042_rtheta_plot.png")
        );
    }
}
