//! PNG rendering of per-site (theta, r) density surfaces.

use super::{FIGURE_SIZE_PX, PlotError};
use crate::analysis::rtheta::RthetaSurface;
use plotters::prelude::*;
use std::path::Path;

// Endpoints of the blue-white-red density ramp.
const COLD: (f64, f64, f64) = (59.0, 76.0, 192.0);
const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
const HOT: (f64, f64, f64) = (180.0, 4.0, 38.0);

/// Renders one site's (theta, r) density surface to `path`.
pub fn render_rtheta_plot(surface: &RthetaSurface, path: &Path) -> Result<(), PlotError> {
    if surface.theta.len() < 2 || surface.r.len() < 2 {
        return Err(PlotError::EmptyCurve { site: surface.site });
    }
    draw(surface, path).map_err(|e| PlotError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw(surface: &RthetaSurface, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let theta_min = surface.theta[0];
    let theta_max = *surface.theta.last().expect("checked non-empty");
    let r_min = surface.r[0];
    let r_max = *surface.r.last().expect("checked non-empty");
    let z_max = surface.max_density().max(f64::MIN_POSITIVE);

    let d_theta = surface.theta[1] - surface.theta[0];
    let d_r = surface.r[1] - surface.r[0];
    let lookup = |t: f64, r: f64| -> f64 {
        let ti = (((t - theta_min) / d_theta).round() as usize).min(surface.theta.len() - 1);
        let ri = (((r - r_min) / d_r).round() as usize).min(surface.r.len() - 1);
        surface.density[ti][ri]
    };

    let root = BitMapBackend::new(path, (FIGURE_SIZE_PX, FIGURE_SIZE_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("{:03}  P(theta, r)", surface.site),
            ("sans-serif", 30),
        )
        .build_cartesian_3d(theta_min..theta_max, 0.0..z_max * 1.1, r_min..r_max)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.45;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .x_labels(7)
        .y_labels(5)
        .z_labels(5)
        .x_formatter(&|v| format!("{v:.0}"))
        .y_formatter(&|v| format!("{v:.2}"))
        .z_formatter(&|v| format!("{v:.1}"))
        .label_style(("sans-serif", 20))
        .draw()?;

    let style = |value: &f64| ramp_color(*value, z_max).mix(0.9).filled();
    chart.draw_series(
        SurfaceSeries::xoz(
            surface.theta.iter().copied(),
            surface.r.iter().copied(),
            lookup,
        )
        .style_func(&style),
    )?;

    root.present()?;
    Ok(())
}

fn ramp_color(value: f64, max: f64) -> RGBColor {
    let t = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (lo, hi, u) = if t < 0.5 {
        (COLD, MID, t * 2.0)
    } else {
        (MID, HOT, (t - 0.5) * 2.0)
    };
    let channel = |a: f64, b: f64| (a + (b - a) * u).round() as u8;
    RGBColor(
        channel(lo.0, hi.0),
        channel(lo.1, hi.1),
        channel(lo.2, hi.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_runs_cold_to_hot() {
        assert_eq!(ramp_color(0.0, 1.0), RGBColor(59, 76, 192));
        assert_eq!(ramp_color(0.5, 1.0), RGBColor(221, 221, 221));
        assert_eq!(ramp_color(1.0, 1.0), RGBColor(180, 4, 38));
        // Degenerate maxima fall back to the cold end.
        assert_eq!(ramp_color(0.0, 0.0), RGBColor(59, 76, 192));
    }

    #[test]
    fn undersized_surfaces_are_rejected() {
        let surface = RthetaSurface {
            site: 1,
            theta: vec![0.0],
            r: vec![2.0, 3.0],
            density: vec![vec![0.0, 0.0]],
        };
        let err = render_rtheta_plot(&surface, Path::new("/tmp/unused.png")).unwrap_err();
        assert!(matches!(err, PlotError::EmptyCurve { site: 1 }));
    }
}
