//! Per-site water-water neighbor interaction-energy (Enbr) density curves.
//!
//! Each pairwise interaction energy is split evenly between the two waters,
//! so samples are halved before estimation. The evaluation grid spans a fixed
//! window in kcal/mol, widened when the data falls outside it. Densities can
//! be normalized by the site's mean neighbor count and compared against a
//! bulk-reference sample set evaluated on the same grid.

use super::AnalysisError;
use super::kde::{Kde1, linspace};

/// Fraction of each pairwise energy assigned to one water.
pub const PAIR_ENERGY_SPLIT: f64 = 0.5;

/// Grid and window settings for Enbr density curves.
#[derive(Debug, Clone, PartialEq)]
pub struct EnbrConfig {
    /// Lower edge of the evaluation window in kcal/mol.
    pub x_low: f64,
    /// Upper edge of the evaluation window in kcal/mol.
    pub x_high: f64,
    /// Number of evaluation points.
    pub grid_points: usize,
}

impl Default for EnbrConfig {
    fn default() -> Self {
        Self {
            x_low: -5.0,
            x_high: 3.0,
            grid_points: 50,
        }
    }
}

impl EnbrConfig {
    pub fn builder() -> EnbrConfigBuilder {
        EnbrConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct EnbrConfigBuilder {
    x_low: Option<f64>,
    x_high: Option<f64>,
    grid_points: Option<usize>,
}

impl EnbrConfigBuilder {
    pub fn x_low(mut self, value: f64) -> Self {
        self.x_low = Some(value);
        self
    }
    pub fn x_high(mut self, value: f64) -> Self {
        self.x_high = Some(value);
        self
    }
    pub fn grid_points(mut self, value: usize) -> Self {
        self.grid_points = Some(value);
        self
    }

    pub fn build(self) -> EnbrConfig {
        let defaults = EnbrConfig::default();
        EnbrConfig {
            x_low: self.x_low.unwrap_or(defaults.x_low),
            x_high: self.x_high.unwrap_or(defaults.x_high),
            grid_points: self.grid_points.unwrap_or(defaults.grid_points),
        }
    }
}

/// A computed per-site Enbr density curve, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct EnbrCurve {
    pub site: usize,
    /// Evaluation grid in kcal/mol.
    pub x: Vec<f64>,
    /// Site density at each grid point.
    pub density: Vec<f64>,
    /// Bulk-reference density on the same grid, when requested.
    pub reference: Option<Vec<f64>>,
    /// Whether densities were scaled by a mean neighbor count.
    pub nbr_normalized: bool,
}

/// Mean neighbor count of a site, used for neighbor normalization.
pub fn mean_neighbor_count(site: usize, nbrs: &[f64]) -> Result<f64, AnalysisError> {
    if nbrs.is_empty() {
        return Err(AnalysisError::EmptyNeighbors { site });
    }
    Ok(nbrs.iter().sum::<f64>() / nbrs.len() as f64)
}

/// Computes the Enbr density curve for one site.
///
/// `samples` are raw pairwise energies; `mean_nbrs` scales the site density
/// when neighbor normalization is requested; `reference` (already on the
/// per-water scale) adds a bulk curve on the same grid, scaled by `ref_nbrs`
/// under neighbor normalization.
pub fn compute_enbr_curve(
    site: usize,
    samples: &[f64],
    mean_nbrs: Option<f64>,
    reference: Option<&[f64]>,
    ref_nbrs: Option<f64>,
    config: &EnbrConfig,
) -> Result<EnbrCurve, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptySamples { site });
    }
    let scaled: Vec<f64> = samples.iter().map(|e| e * PAIR_ENERGY_SPLIT).collect();

    let mut x_low = config.x_low;
    let mut x_high = config.x_high;
    for &e in &scaled {
        if e < x_low {
            x_low = e;
        }
        if e > x_high {
            x_high = e;
        }
    }
    let x = linspace(x_low, x_high, config.grid_points);

    let kde = Kde1::fit(&scaled).map_err(|source| AnalysisError::Kde { site, source })?;
    let mut density = kde.evaluate_grid(&x);
    if let Some(nbrs) = mean_nbrs {
        for p in &mut density {
            *p *= nbrs;
        }
    }

    let reference = match reference {
        Some(ref_samples) => {
            if ref_samples.is_empty() {
                return Err(AnalysisError::EmptyReference);
            }
            let ref_kde =
                Kde1::fit(ref_samples).map_err(|source| AnalysisError::ReferenceKde { source })?;
            let mut ref_density = ref_kde.evaluate_grid(&x);
            if mean_nbrs.is_some() {
                let scale = ref_nbrs.unwrap_or(1.0);
                for p in &mut ref_density {
                    *p *= scale;
                }
            }
            Some(ref_density)
        }
        None => None,
    };

    Ok(EnbrCurve {
        site,
        x,
        density,
        reference,
        nbr_normalized: mean_nbrs.is_some(),
    })
}
