//! Per-site joint angular/radial (theta, r) density surfaces.
//!
//! Theta is the hydrogen-bond angle in degrees, r the oxygen-oxygen distance
//! in Angstroms. A 2-D kernel density estimate is evaluated on a fixed grid,
//! scaled by the angular integration constant, and each radial column is
//! divided by the number of bulk waters expected in a thin spherical shell at
//! that distance, so the surface reads as enrichment over bulk.

use super::AnalysisError;
use super::kde::{Kde2, linspace};
use std::f64::consts::PI;

/// Angular integration constant of the (theta, r) histogramming scheme.
pub const INTEGRATION_COUNTS: f64 = 16.362_444_588_6;
/// Bulk water number density in waters per cubic Angstrom.
pub const BULK_WATER_DENSITY: f64 = 0.0329;

/// Grid and normalization settings for (theta, r) surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct RthetaConfig {
    /// Upper edge of the theta axis in degrees (lower edge is 0).
    pub theta_max: f64,
    /// Number of theta grid points.
    pub theta_points: usize,
    /// Lower edge of the r axis in Angstroms.
    pub r_min: f64,
    /// Upper edge of the r axis in Angstroms.
    pub r_max: f64,
    /// Number of r grid points.
    pub r_points: usize,
    /// Radial shell width in Angstroms for bulk normalization.
    pub shell_width: f64,
}

impl Default for RthetaConfig {
    fn default() -> Self {
        Self {
            theta_max: 130.0,
            theta_points: 131,
            r_min: 2.0,
            r_max: 6.0,
            r_points: 41,
            shell_width: 0.1,
        }
    }
}

impl RthetaConfig {
    pub fn builder() -> RthetaConfigBuilder {
        RthetaConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct RthetaConfigBuilder {
    theta_max: Option<f64>,
    theta_points: Option<usize>,
    r_min: Option<f64>,
    r_max: Option<f64>,
    r_points: Option<usize>,
    shell_width: Option<f64>,
}

impl RthetaConfigBuilder {
    pub fn theta_max(mut self, value: f64) -> Self {
        self.theta_max = Some(value);
        self
    }
    pub fn theta_points(mut self, value: usize) -> Self {
        self.theta_points = Some(value);
        self
    }
    pub fn r_min(mut self, value: f64) -> Self {
        self.r_min = Some(value);
        self
    }
    pub fn r_max(mut self, value: f64) -> Self {
        self.r_max = Some(value);
        self
    }
    pub fn r_points(mut self, value: usize) -> Self {
        self.r_points = Some(value);
        self
    }
    pub fn shell_width(mut self, value: f64) -> Self {
        self.shell_width = Some(value);
        self
    }

    pub fn build(self) -> RthetaConfig {
        let defaults = RthetaConfig::default();
        RthetaConfig {
            theta_max: self.theta_max.unwrap_or(defaults.theta_max),
            theta_points: self.theta_points.unwrap_or(defaults.theta_points),
            r_min: self.r_min.unwrap_or(defaults.r_min),
            r_max: self.r_max.unwrap_or(defaults.r_max),
            r_points: self.r_points.unwrap_or(defaults.r_points),
            shell_width: self.shell_width.unwrap_or(defaults.shell_width),
        }
    }
}

/// A computed per-site (theta, r) density surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RthetaSurface {
    pub site: usize,
    /// Theta grid in degrees.
    pub theta: Vec<f64>,
    /// r grid in Angstroms.
    pub r: Vec<f64>,
    /// Bulk-normalized density, indexed `[theta][r]`.
    pub density: Vec<Vec<f64>>,
}

impl RthetaSurface {
    /// Largest density value on the surface.
    pub fn max_density(&self) -> f64 {
        self.density
            .iter()
            .flatten()
            .copied()
            .fold(0.0f64, f64::max)
    }
}

/// Volume of the spherical shell between `r - width` and `r`.
fn shell_volume(r: f64, width: f64) -> f64 {
    let inner = r - width;
    (4.0 / 3.0) * PI * (r.powi(3) - inner.powi(3))
}

/// Computes the bulk-normalized (theta, r) density surface for one site.
pub fn compute_rtheta_surface(
    site: usize,
    samples: &[(f64, f64)],
    config: &RthetaConfig,
) -> Result<RthetaSurface, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptySamples { site });
    }
    let kde = Kde2::fit(samples).map_err(|source| AnalysisError::Kde { site, source })?;

    let theta = linspace(0.0, config.theta_max, config.theta_points);
    let r = linspace(config.r_min, config.r_max, config.r_points);

    let kernel_scale = INTEGRATION_COUNTS * config.shell_width;
    let bulk_counts: Vec<f64> = r
        .iter()
        .map(|&d| BULK_WATER_DENSITY * shell_volume(d, config.shell_width))
        .collect();

    let density = theta
        .iter()
        .map(|&t| {
            r.iter()
                .zip(&bulk_counts)
                .map(|(&d, &counts_bulk)| kde.evaluate(t, d) * kernel_scale / counts_bulk)
                .collect()
        })
        .collect();

    Ok(RthetaSurface {
        site,
        theta,
        r,
        density,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clustered_samples() -> Vec<(f64, f64)> {
        // A loose cluster around (15 deg, 2.8 A), typical of a hydrogen bond.
        vec![
            (10.0, 2.7),
            (12.0, 2.8),
            (18.0, 2.9),
            (25.0, 3.0),
            (8.0, 2.75),
            (30.0, 3.1),
            (15.0, 2.85),
            (20.0, 2.95),
        ]
    }

    #[test]
    fn default_grid_has_canonical_shape() {
        let surface =
            compute_rtheta_surface(0, &clustered_samples(), &RthetaConfig::default()).unwrap();
        assert_eq!(surface.theta.len(), 131);
        assert_eq!(surface.r.len(), 41);
        assert_eq!(surface.density.len(), 131);
        assert!(surface.density.iter().all(|col| col.len() == 41));
        assert_eq!(surface.theta[0], 0.0);
        assert_eq!(surface.theta[130], 130.0);
        assert_eq!(surface.r[0], 2.0);
        assert!((surface.r[1] - 2.1).abs() < 1e-12);
        assert_eq!(surface.r[40], 6.0);
    }

    #[test]
    fn density_peaks_near_the_data_cluster() {
        let surface =
            compute_rtheta_surface(1, &clustered_samples(), &RthetaConfig::default()).unwrap();
        // theta index 15 is 15 degrees, r index 8 is 2.8 A on the default grid.
        let near = surface.density[15][8];
        let far = surface.density[120][38];
        assert!(near > far);
        assert!(surface.max_density() >= near);
    }

    #[test]
    fn shell_volumes_grow_with_radius() {
        let v3 = shell_volume(3.0, 0.1);
        let v5 = shell_volume(5.0, 0.1);
        assert!(v5 > v3);
        // d^3 - (d - w)^3 for d = 3, w = 0.1.
        let expected = (4.0 / 3.0) * PI * (27.0 - 2.9f64.powi(3));
        assert!((v3 - expected).abs() < 1e-12);
    }

    #[test]
    fn surface_values_are_finite_and_nonnegative() {
        let surface =
            compute_rtheta_surface(2, &clustered_samples(), &RthetaConfig::default()).unwrap();
        for col in &surface.density {
            for &v in col {
                assert!(v.is_finite());
                assert!(v >= 0.0);
            }
        }
    }

    #[test]
    fn empty_and_degenerate_inputs_are_rejected() {
        assert!(matches!(
            compute_rtheta_surface(5, &[], &RthetaConfig::default()),
            Err(AnalysisError::EmptySamples { site: 5 })
        ));
        let collinear = vec![(0.0, 2.0), (10.0, 2.0), (20.0, 2.0), (30.0, 2.0)];
        assert!(matches!(
            compute_rtheta_surface(5, &collinear, &RthetaConfig::default()),
            Err(AnalysisError::Kde { site: 5, .. })
        ));
    }

    #[test]
    fn builder_overrides_selected_fields() {
        let config = RthetaConfig::builder().r_max(8.0).theta_points(66).build();
        assert_eq!(config.r_max, 8.0);
        assert_eq!(config.theta_points, 66);
        assert_eq!(config.theta_max, 130.0);
        assert_eq!(config.shell_width, 0.1);
    }
}
