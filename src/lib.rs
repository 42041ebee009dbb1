//! Exploratory geometric analysis of 3D point clouds for ad-hoc quality
//! inspection of scanned or generated shapes.
//!
//! The analysis computes bounding-box and centroid statistics, characterizes
//! shape symmetry with a principal component decomposition, and flags points
//! whose distance from the centroid is statistically anomalous as deformation
//! candidates. A companion binary prints a textual report and renders a
//! four-panel 3D scatter plot of the result.
//!
//! # Example
//!
//! ```
//! use deformscan::{AnalysisParameters, ShapeAnalyzer};
//! use glam::Vec3A;
//!
//! let points = vec![
//!     Vec3A::new(1.0, 0.0, 0.0),
//!     Vec3A::new(-1.0, 0.0, 0.0),
//!     Vec3A::new(0.0, 1.0, 0.0),
//!     Vec3A::new(0.0, -1.0, 0.0),
//!     Vec3A::new(0.0, 0.0, 1.0),
//!     Vec3A::new(0.0, 0.0, -1.0),
//! ];
//!
//! let analyzer = ShapeAnalyzer::new(AnalysisParameters::new());
//! let analysis = analyzer.analyze(&points).unwrap();
//!
//! assert_eq!(analysis.deformation.count(), 0);
//! ```

#![warn(missing_docs)]

pub mod deformation;
pub mod geometry;
pub mod load;
pub mod parameters;
pub mod pca;
pub mod render;

pub(crate) mod math;

pub use deformation::DeformationReport;
pub use geometry::{BoundingBox, GeometryError, ShapeStats};
pub use parameters::AnalysisParameters;
pub use pca::{Pca, Symmetry};

use glam::Vec3A;
use thiserror::Error;

/// Errors that can occur during a shape analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The point cloud is empty.
    #[error("the point cloud is empty")]
    NoPoints,
    /// The shape statistics could not be derived.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// The bundled results of one analysis run.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Bounding-box, centroid, and distance statistics.
    pub stats: ShapeStats,
    /// The ratio of each bounding-box extent to the shortest extent.
    pub aspect_ratios: Vec3A,
    /// The principal component decomposition of the point cloud.
    pub pca: Pca,
    /// The statistical deformation check over the distance vector.
    pub deformation: DeformationReport,
}

/// Runs the shape analysis pipeline over a point cloud.
///
/// All stages are stateless pure transforms; the analyzer only carries the
/// [`AnalysisParameters`] they are invoked with.
pub struct ShapeAnalyzer {
    /// The parameters of the analysis.
    pub parameters: AnalysisParameters,
}

impl ShapeAnalyzer {
    /// Creates a new analyzer with the given parameters.
    #[inline]
    pub const fn new(parameters: AnalysisParameters) -> Self {
        Self { parameters }
    }

    /// Analyzes a point cloud: shape statistics, PCA, and deformation check,
    /// in that order.
    ///
    /// The deformation check consumes the distance vector produced by the
    /// shape statistics, so the two stay index-aligned by construction.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::NoPoints`]: The input slice is empty.
    /// - [`AnalysisError::Geometry`]: The bounding box is flat along an axis,
    ///   making aspect ratios undefined.
    pub fn analyze(&self, points: &[Vec3A]) -> Result<Analysis, AnalysisError> {
        let stats = ShapeStats::compute(points).ok_or(AnalysisError::NoPoints)?;
        let aspect_ratios = stats.aspect_ratios()?;
        let pca = Pca::from_points(points).ok_or(AnalysisError::NoPoints)?;
        let deformation =
            DeformationReport::detect(&stats.distances, self.parameters.deviation_band)
                .ok_or(AnalysisError::NoPoints)?;

        Ok(Analysis {
            stats,
            aspect_ratios,
            pca,
            deformation,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{
        distr::{Distribution, Uniform},
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn analyze(points: &[Vec3A]) -> Analysis {
        ShapeAnalyzer::new(AnalysisParameters::new())
            .analyze(points)
            .unwrap()
    }

    /// Samples points uniformly on the unit sphere using the cylinder method.
    fn unit_sphere(n: usize, seed: u64) -> Vec<Vec3A> {
        let mut rng = StdRng::seed_from_u64(seed);
        let height = Uniform::new(-1.0f32, 1.0).unwrap();
        let angle = Uniform::new(0.0f32, std::f32::consts::TAU).unwrap();

        (0..n)
            .map(|_| {
                let z = height.sample(&mut rng);
                let theta = angle.sample(&mut rng);
                let r = (1.0 - z * z).sqrt();
                Vec3A::new(r * theta.cos(), r * theta.sin(), z)
            })
            .collect()
    }

    #[test]
    fn test_sampled_sphere() {
        let points = unit_sphere(400, 42);
        let analysis = analyze(&points);

        // All samples sit on the unit sphere, so distances cluster tightly
        // around the radius. The centroid of a finite sample is only
        // approximately at the origin, which bounds how tight they can be.
        assert_relative_eq!(analysis.deformation.mean, 1.0, epsilon = 5e-3);
        assert!(analysis.deformation.std < 0.1);
        assert!(analysis.deformation.fraction() <= 0.1);

        // A sphere spreads its variance evenly over the principal axes.
        let ratios = analysis.pca.explained_variance_ratio();
        for ratio in ratios.to_array() {
            assert_relative_eq!(ratio, 1.0 / 3.0, epsilon = 0.05);
        }
        assert_eq!(
            analysis.pca.symmetry(0.2),
            Symmetry::RelativelySymmetric
        );
    }

    #[test]
    fn test_exact_octahedron() {
        // The octahedron vertices have exactly representable distances and an
        // exactly zero centroid, so the distance spread is exactly zero and
        // nothing may be flagged.
        let points = vec![
            Vec3A::new(1.0, 0.0, 0.0),
            Vec3A::new(-1.0, 0.0, 0.0),
            Vec3A::new(0.0, 1.0, 0.0),
            Vec3A::new(0.0, -1.0, 0.0),
            Vec3A::new(0.0, 0.0, 1.0),
            Vec3A::new(0.0, 0.0, -1.0),
        ];
        let analysis = analyze(&points);

        assert_eq!(analysis.deformation.mean, 1.0);
        assert_eq!(analysis.deformation.std, 0.0);
        assert_eq!(analysis.deformation.count(), 0);
        assert_relative_eq!(analysis.aspect_ratios, Vec3A::ONE);
        assert_eq!(
            analysis.pca.symmetry(0.2),
            Symmetry::RelativelySymmetric
        );
    }

    #[test]
    fn test_cube_with_displaced_corner() {
        // A 5x5x5 grid filling a cube, with one corner moved far away.
        let mut points = Vec::new();
        for x in 0..5 {
            for y in 0..5 {
                for z in 0..5 {
                    points.push(Vec3A::new(
                        x as f32 * 0.5 - 1.0,
                        y as f32 * 0.5 - 1.0,
                        z as f32 * 0.5 - 1.0,
                    ));
                }
            }
        }
        let corner = points.len() - 1;
        points[corner] = Vec3A::new(100.0, 100.0, 100.0);

        let analysis = analyze(&points);

        // The displaced corner is the only deformation candidate.
        assert_eq!(analysis.deformation.count(), 1);
        assert!(analysis.deformation.mask[corner]);
        assert_relative_eq!(
            analysis.deformation.fraction(),
            1.0 / points.len() as f32
        );
    }

    #[test]
    fn test_flat_plane_is_degenerate() {
        let points = vec![
            Vec3A::new(0.0, 0.0, 2.0),
            Vec3A::new(1.0, 0.0, 2.0),
            Vec3A::new(0.0, 1.0, 2.0),
            Vec3A::new(1.0, 1.0, 2.0),
        ];

        let result = ShapeAnalyzer::new(AnalysisParameters::new()).analyze(&points);
        assert!(matches!(
            result,
            Err(AnalysisError::Geometry(GeometryError::DegenerateShape { .. }))
        ));
    }

    #[test]
    fn test_empty_cloud() {
        let result = ShapeAnalyzer::new(AnalysisParameters::new()).analyze(&[]);
        assert!(matches!(result, Err(AnalysisError::NoPoints)));
    }
}
