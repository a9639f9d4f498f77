//! Gaussian kernel density estimation with Scott's bandwidth rule.
//!
//! The estimators mirror the behavior of the reference statistics stack this
//! tool historically sat on: the smoothing factor is `n^(-1/(d+4))`, the
//! kernel covariance is that factor squared times the sample covariance
//! (computed with one delta degree of freedom), and evaluation is a direct
//! sum over the data. Degenerate inputs (too few samples, zero variance, a
//! singular covariance) are rejected rather than silently smoothed.

use nalgebra::{Matrix2, Vector2};
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KdeError {
    #[error("need at least {min} samples for a {dims}-D estimate, got {got}")]
    TooFewSamples { min: usize, dims: usize, got: usize },
    #[error("sample variance is zero; the bandwidth is degenerate")]
    ZeroVariance,
    #[error("sample covariance is singular; the bandwidth is degenerate")]
    SingularCovariance,
}

/// Evenly spaced grid of `n` points from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
    // Pin the endpoint; accumulated rounding must not shift it.
    grid[n - 1] = hi;
    grid
}

/// A fitted 1-D Gaussian kernel density estimate.
#[derive(Debug, Clone)]
pub struct Kde1 {
    samples: Vec<f64>,
    two_h2: f64,
    norm: f64,
}

impl Kde1 {
    /// Fits the estimate to `samples` with Scott's rule (`n^(-1/5)`).
    pub fn fit(samples: &[f64]) -> Result<Self, KdeError> {
        let n = samples.len();
        if n < 2 {
            return Err(KdeError::TooFewSamples {
                min: 2,
                dims: 1,
                got: n,
            });
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance =
            samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1) as f64;
        if variance <= 0.0 {
            return Err(KdeError::ZeroVariance);
        }
        let factor = (n as f64).powf(-1.0 / 5.0);
        let h2 = factor * factor * variance;
        Ok(Self {
            samples: samples.to_vec(),
            two_h2: 2.0 * h2,
            norm: 1.0 / (n as f64 * (2.0 * PI * h2).sqrt()),
        })
    }

    /// Density at a single point.
    pub fn evaluate(&self, x: f64) -> f64 {
        let sum: f64 = self
            .samples
            .iter()
            .map(|xi| {
                let d = x - xi;
                (-(d * d) / self.two_h2).exp()
            })
            .sum();
        self.norm * sum
    }

    /// Density over a grid of points.
    pub fn evaluate_grid(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// A fitted 2-D Gaussian kernel density estimate.
#[derive(Debug, Clone)]
pub struct Kde2 {
    samples: Vec<Vector2<f64>>,
    inv_cov: Matrix2<f64>,
    norm: f64,
}

impl Kde2 {
    /// Fits the estimate to (x, y) `samples` with Scott's rule (`n^(-1/6)`).
    pub fn fit(samples: &[(f64, f64)]) -> Result<Self, KdeError> {
        let n = samples.len();
        if n < 3 {
            return Err(KdeError::TooFewSamples {
                min: 3,
                dims: 2,
                got: n,
            });
        }
        let nf = n as f64;
        let mean_x = samples.iter().map(|s| s.0).sum::<f64>() / nf;
        let mean_y = samples.iter().map(|s| s.1).sum::<f64>() / nf;
        let mut cxx = 0.0;
        let mut cyy = 0.0;
        let mut cxy = 0.0;
        for &(x, y) in samples {
            let dx = x - mean_x;
            let dy = y - mean_y;
            cxx += dx * dx;
            cyy += dy * dy;
            cxy += dx * dy;
        }
        let ddof = (n - 1) as f64;
        let factor = nf.powf(-1.0 / 6.0);
        let scale = factor * factor / ddof;
        let cov = Matrix2::new(cxx * scale, cxy * scale, cxy * scale, cyy * scale);
        let det = cov.determinant();
        if !(det > f64::EPSILON) {
            return Err(KdeError::SingularCovariance);
        }
        let inv_cov = cov.try_inverse().ok_or(KdeError::SingularCovariance)?;
        Ok(Self {
            samples: samples.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
            inv_cov,
            norm: 1.0 / (nf * 2.0 * PI * det.sqrt()),
        })
    }

    /// Density at a single (x, y) point.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let p = Vector2::new(x, y);
        let sum: f64 = self
            .samples
            .iter()
            .map(|s| {
                let d = p - s;
                (-0.5 * (self.inv_cov * d).dot(&d)).exp()
            })
            .sum();
        self.norm * sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn linspace_endpoints_and_spacing() {
        let xs = linspace(-5.0, 3.0, 50);
        assert_eq!(xs.len(), 50);
        assert!(approx(xs[0], -5.0, 1e-12));
        assert!(approx(xs[49], 3.0, 1e-12));
        assert!(approx(xs[1] - xs[0], 8.0 / 49.0, 1e-12));
    }

    #[test]
    fn one_dimensional_density_is_symmetric_and_normalized() {
        let samples = vec![-1.0, -0.5, 0.0, 0.5, 1.0, -0.25, 0.25, 0.75, -0.75];
        let kde = Kde1::fit(&samples).unwrap();
        // Symmetric data, symmetric density.
        assert!(approx(kde.evaluate(0.4), kde.evaluate(-0.4), 1e-12));
        // Trapezoid integral over a wide grid is close to 1.
        let xs = linspace(-20.0, 20.0, 4001);
        let ps = kde.evaluate_grid(&xs);
        let dx = xs[1] - xs[0];
        let integral: f64 = ps.windows(2).map(|w| 0.5 * (w[0] + w[1]) * dx).sum();
        assert!(approx(integral, 1.0, 1e-6), "integral was {integral}");
    }

    #[test]
    fn one_dimensional_matches_hand_computation() {
        let samples = vec![0.0, 2.0];
        let kde = Kde1::fit(&samples).unwrap();
        // n = 2, variance = 2, factor = 2^(-1/5), h2 = 2^(1-2/5).
        let h2 = 2f64.powf(1.0 - 2.0 / 5.0);
        let expected = (1.0 / (2.0 * (2.0 * PI * h2).sqrt()))
            * ((-1.0f64 / (2.0 * h2)).exp() + (-1.0f64 / (2.0 * h2)).exp());
        assert!(approx(kde.evaluate(1.0), expected, 1e-12));
    }

    #[test]
    fn one_dimensional_rejects_degenerate_input() {
        assert!(matches!(
            Kde1::fit(&[1.0]),
            Err(KdeError::TooFewSamples {
                min: 2,
                dims: 1,
                got: 1
            })
        ));
        assert!(matches!(
            Kde1::fit(&[3.0, 3.0, 3.0]),
            Err(KdeError::ZeroVariance)
        ));
    }

    #[test]
    fn two_dimensional_density_integrates_to_one() {
        let samples = vec![
            (0.0, 0.0),
            (1.0, 0.5),
            (-1.0, -0.5),
            (0.5, 1.0),
            (-0.5, -1.0),
            (0.25, -0.75),
            (-0.25, 0.75),
        ];
        let kde = Kde2::fit(&samples).unwrap();
        let xs = linspace(-15.0, 15.0, 301);
        let ys = linspace(-15.0, 15.0, 301);
        let dx = xs[1] - xs[0];
        let dy = ys[1] - ys[0];
        let mut integral = 0.0;
        for &x in &xs {
            for &y in &ys {
                integral += kde.evaluate(x, y) * dx * dy;
            }
        }
        assert!((integral - 1.0).abs() < 1e-3, "integral was {integral}");
    }

    #[test]
    fn two_dimensional_rejects_collinear_input() {
        // Perfectly correlated coordinates give a singular covariance.
        let samples = vec![(0.0, 0.0), (1.0, 2.0), (2.0, 4.0), (3.0, 6.0)];
        assert!(matches!(
            Kde2::fit(&samples),
            Err(KdeError::SingularCovariance)
        ));
    }

    #[test]
    fn two_dimensional_peak_sits_on_the_data() {
        let samples = vec![(10.0, 3.0), (10.5, 3.1), (9.5, 2.9), (10.2, 3.05), (9.8, 2.95)];
        let kde = Kde2::fit(&samples).unwrap();
        assert!(kde.evaluate(10.0, 3.0) > kde.evaluate(14.0, 5.0));
    }
}
