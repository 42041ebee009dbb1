//! Bounding-box, centroid, and distance-from-centroid statistics for a point cloud.

use glam::Vec3A;
use thiserror::Error;

use crate::math;

/// An axis-aligned bounding box of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// The elementwise minimum coordinates over all points.
    pub min: Vec3A,
    /// The elementwise maximum coordinates over all points.
    pub max: Vec3A,
}

impl BoundingBox {
    /// An invalid bounding box that contains no points.
    /// Extending it with any point produces a valid degenerate box at that point.
    pub const INVALID: Self = Self {
        min: Vec3A::INFINITY,
        max: Vec3A::NEG_INFINITY,
    };

    /// Computes the bounding box of a set of points.
    pub fn from_points(points: &[Vec3A]) -> Self {
        let mut bounds = Self::INVALID;
        for point in points {
            bounds.extend(*point);
        }
        bounds
    }

    /// Grows the bounding box to contain the given point.
    #[inline]
    pub fn extend(&mut self, point: Vec3A) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns the extent of the box along each axis.
    ///
    /// An extent may be zero along a degenerate axis, for example for a flat plane.
    #[inline]
    pub fn dimensions(&self) -> Vec3A {
        self.max - self.min
    }
}

/// Errors that can occur when deriving shape statistics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The bounding box is flat along at least one axis,
    /// so aspect ratios are undefined.
    #[error("degenerate shape: the bounding box is flat along at least one axis (dimensions {dimensions})")]
    DegenerateShape {
        /// The bounding box extents that triggered the error.
        dimensions: Vec3A,
    },
}

/// Bounding-box, centroid, and per-point distance statistics of a point cloud.
///
/// The statistics are computed once per analysis run and are not cached
/// across runs. `distances[i]` is the Euclidean distance of `points[i]` from
/// the centroid; the vector is index-aligned with the input slice, which the
/// deformation detector and the scatter renderer rely on.
#[derive(Clone, Debug)]
pub struct ShapeStats {
    /// The axis-aligned bounding box of the point cloud.
    pub bounds: BoundingBox,
    /// The extent of the bounding box along each axis.
    pub dimensions: Vec3A,
    /// The centroid of the point cloud.
    pub centroid: Vec3A,
    /// The Euclidean distance of each point from the centroid,
    /// index-aligned with the input points.
    pub distances: Vec<f32>,
}

impl ShapeStats {
    /// Computes the shape statistics of a set of points.
    ///
    /// Returns `None` if the input slice is empty.
    pub fn compute(points: &[Vec3A]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let bounds = BoundingBox::from_points(points);
        let centroid = math::centroid(points);
        let distances = points
            .iter()
            .map(|point| (*point - centroid).length())
            .collect();

        Some(Self {
            bounds,
            dimensions: bounds.dimensions(),
            centroid,
            distances,
        })
    }

    /// Returns the ratio of each bounding-box extent to the shortest extent.
    ///
    /// The axis with the minimum extent always yields a ratio of `1.0`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateShape`] if the minimum extent is zero,
    /// which would make the ratios undefined.
    pub fn aspect_ratios(&self) -> Result<Vec3A, GeometryError> {
        let min_dimension = self.dimensions.min_element();
        if min_dimension <= 0.0 {
            return Err(GeometryError::DegenerateShape {
                dimensions: self.dimensions,
            });
        }
        Ok(self.dimensions / min_dimension)
    }
}
