//! Multi-angle 3D scatter-plot rendering of an analyzed point cloud.
//!
//! The core analysis stays headless; this module is the only place that
//! touches a drawing backend.

use std::path::Path;

use glam::Vec3A;
use plotters::prelude::*;
use thiserror::Error;

use crate::geometry::BoundingBox;
use crate::parameters::AnalysisParameters;

/// The camera angles of the four panels, as (elevation, azimuth) in degrees.
const VIEWS: [(f64, f64, &str); 4] = [
    (30.0, 45.0, "Isometric View"),
    (90.0, 0.0, "Side View"),
    (0.0, 90.0, "Top View"),
    (0.0, 0.0, "Front View"),
];

/// Errors that can occur while rendering the scatter panels.
#[derive(Error, Debug)]
pub enum RenderError {
    /// There are no points to render.
    #[error("cannot render an empty point cloud")]
    NoPoints,
    /// The drawing backend failed.
    ///
    /// The message is stringified because the backend error type is generic
    /// over the backend.
    #[error("failed to render the scatter panels: {0}")]
    Backend(String),
}

fn backend_error(error: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(error.to_string())
}

/// Renders four 3D scatter-plot panels of the point cloud to a PNG file.
///
/// Normal points are drawn in blue and deformation candidates in red,
/// using the index-aligned `mask` to tell them apart. Each panel shows the
/// same cloud from a different camera angle, with equal axis spans so the
/// shape is not distorted.
pub fn save_scatter_panels(
    points: &[Vec3A],
    mask: &[bool],
    path: impl AsRef<Path>,
    parameters: &AnalysisParameters,
) -> Result<(), RenderError> {
    if points.is_empty() {
        return Err(RenderError::NoPoints);
    }

    let root = BitMapBackend::new(
        path.as_ref(),
        (parameters.image_width, parameters.image_height),
    )
    .into_drawing_area();
    root.fill(&WHITE).map_err(backend_error)?;

    // Equal spans per axis, centered on the bounding box, with a small margin.
    let bounds = BoundingBox::from_points(points);
    let center = (bounds.min + bounds.max) * 0.5;
    let mut half_span = bounds.dimensions().max_element() * 0.55;
    if half_span <= 0.0 {
        half_span = 0.5;
    }

    let panels = root.split_evenly((1, 4));
    for (index, (panel, &(elevation, azimuth, title))) in
        panels.iter().zip(VIEWS.iter()).enumerate()
    {
        let mut chart = ChartBuilder::on(panel)
            .caption(title, ("sans-serif", 20))
            .margin(10)
            .build_cartesian_3d(
                center.x - half_span..center.x + half_span,
                center.y - half_span..center.y + half_span,
                center.z - half_span..center.z + half_span,
            )
            .map_err(backend_error)?;

        chart.with_projection(|mut projection| {
            projection.pitch = elevation.to_radians();
            projection.yaw = azimuth.to_radians();
            projection.scale = 0.9;
            projection.into_matrix()
        });
        chart.configure_axes().draw().map_err(backend_error)?;

        let marker = parameters.marker_size as i32;
        chart
            .draw_series(
                points
                    .iter()
                    .zip(mask.iter())
                    .filter(|(_, &flagged)| !flagged)
                    .map(|(p, _)| Circle::new((p.x, p.y, p.z), marker, BLUE.mix(0.6).filled())),
            )
            .map_err(backend_error)?
            .label("Normal")
            .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));
        chart
            .draw_series(
                points
                    .iter()
                    .zip(mask.iter())
                    .filter(|(_, &flagged)| flagged)
                    .map(|(p, _)| Circle::new((p.x, p.y, p.z), marker, RED.mix(0.8).filled())),
            )
            .map_err(backend_error)?
            .label("Potential Deformation")
            .legend(|(x, y)| Circle::new((x, y), 3, RED.filled()));

        // Only the first panel carries the legend.
        if index == 0 {
            chart
                .configure_series_labels()
                .border_style(BLACK)
                .background_style(WHITE.mix(0.8))
                .draw()
                .map_err(backend_error)?;
        }
    }

    root.present().map_err(backend_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_smoke() {
        let points = vec![
            Vec3A::new(1.0, 0.0, 0.0),
            Vec3A::new(-1.0, 0.0, 0.0),
            Vec3A::new(0.0, 1.0, 0.0),
            Vec3A::new(0.0, -1.0, 0.0),
            Vec3A::new(0.0, 0.0, 1.0),
            Vec3A::new(0.0, 0.0, 5.0),
        ];
        let mask = vec![false, false, false, false, false, true];

        let path = std::env::temp_dir().join("deformscan_render_smoke.png");
        save_scatter_panels(&points, &mask, &path, &AnalysisParameters::new()).unwrap();

        assert!(path.metadata().map(|m| m.len() > 0).unwrap_or(false));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_empty() {
        let path = std::env::temp_dir().join("deformscan_render_empty.png");
        let result = save_scatter_panels(&[], &[], &path, &AnalysisParameters::new());
        assert!(matches!(result, Err(RenderError::NoPoints)));
    }
}
