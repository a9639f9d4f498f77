//! PNG rendering of per-site Enbr density curves.

use super::{FIGURE_SIZE_PX, PlotError};
use crate::analysis::enbr::EnbrCurve;
use plotters::prelude::*;
use std::path::Path;

const SITE_COLOR: RGBColor = RED;
const REFERENCE_COLOR: RGBColor = GREEN;

/// Renders one site's Enbr density curve to `path`.
pub fn render_enbr_plot(curve: &EnbrCurve, path: &Path) -> Result<(), PlotError> {
    if curve.x.len() < 2 {
        return Err(PlotError::EmptyCurve { site: curve.site });
    }
    draw(curve, path).map_err(|e| PlotError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw(curve: &EnbrCurve, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let x_low = curve.x[0];
    let x_high = *curve.x.last().expect("checked non-empty");
    let mut y_max = curve.density.iter().copied().fold(0.0f64, f64::max);
    if let Some(reference) = &curve.reference {
        y_max = reference.iter().copied().fold(y_max, f64::max);
    }
    let y_high = y_max + 0.1;

    let root = BitMapBackend::new(path, (FIGURE_SIZE_PX, FIGURE_SIZE_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_label = if curve.nbr_normalized {
        "rho(E_n) * N_nbr"
    } else {
        "rho(E_n)"
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(x_low..x_high, 0.0f64..y_high)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("E_n (kcal/mol)")
        .y_desc(y_label)
        .x_labels(((x_high - x_low) / 2.0).round().max(2.0) as usize)
        .y_labels((y_high / 0.2).ceil().max(2.0) as usize)
        .x_label_formatter(&|v| format!("{v:.1}"))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .axis_desc_style(("sans-serif", 28))
        .label_style(("sans-serif", 24))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            curve.x.iter().copied().zip(curve.density.iter().copied()),
            SITE_COLOR.stroke_width(2),
        ))?
        .label(format!("{:03}", curve.site))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SITE_COLOR.stroke_width(2)));

    if let Some(reference) = &curve.reference {
        chart
            .draw_series(LineSeries::new(
                curve.x.iter().copied().zip(reference.iter().copied()),
                REFERENCE_COLOR.stroke_width(2),
            ))?
            .label("Reference")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], REFERENCE_COLOR.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 24))
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
